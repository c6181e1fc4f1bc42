//! Row dot-product kernel shared by the serial and threaded backends.
//!
//! Accumulation is a plain multiply followed by an add, with `j` ascending
//! and the sum starting from 0.0. Every backend must go through this loop so
//! that results stay bit-identical regardless of worker count.

use crate::partition::RowRange;

/// Computes `y_local[i - rows.first()] = A[i, :] . x` for every row `i` in `rows`.
///
/// - `a`: row-major matrix data with `n` columns
/// - `x`: vector of length `n`
/// - `y_local`: the caller's slice of the output, exactly `rows.len()` long
///
/// An empty range writes nothing.
pub fn matvec_rows(a: &[f64], n: usize, x: &[f64], y_local: &mut [f64], rows: RowRange) {
    debug_assert_eq!(y_local.len(), rows.len());
    debug_assert_eq!(x.len(), n);

    for (out, i) in y_local.iter_mut().zip(rows.rows()) {
        let row = &a[i * n..(i + 1) * n];
        let mut sum = 0.0f64;
        for (&aij, &xj) in row.iter().zip(x) {
            sum += aij * xj;
        }
        *out = sum;
    }
}

/// Serial reference: the kernel over every row of `y`.
pub fn matvec_serial(a: &[f64], n: usize, x: &[f64], y: &mut [f64]) {
    let all = RowRange::new(0, y.len());
    matvec_rows(a, n, x, y, all);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rows_subrange() {
        // 3x2 matrix, compute rows 1..=2 only.
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = [10.0, 1.0];
        let mut y = [0.0; 2];
        matvec_rows(&a, 2, &x, &mut y, RowRange::new(1, 3));
        assert_eq!(y, [34.0, 56.0]);
    }

    #[test]
    fn test_empty_range_is_noop() {
        let a = [1.0, 2.0];
        let x = [1.0, 1.0];
        let mut y: [f64; 0] = [];
        matvec_rows(&a, 2, &x, &mut y, RowRange::new(1, 1));
    }

    #[test]
    fn test_serial_fractional() {
        let a = [0.1, 0.2, 0.3, 0.4];
        let x = [0.5, 0.25];
        let mut y = [0.0; 2];
        matvec_serial(&a, 2, &x, &mut y);
        assert_abs_diff_eq!(y[0], 0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(y[1], 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_single_column() {
        let a = [2.0, 3.0, 4.0];
        let x = [0.5];
        let mut y = [0.0; 3];
        matvec_serial(&a, 1, &x, &mut y);
        assert_eq!(y, [1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_overwrites_stale_output() {
        let a = [1.0, 1.0];
        let x = [2.0, 3.0];
        let mut y = [f64::NAN];
        matvec_serial(&a, 2, &x, &mut y);
        assert_eq!(y, [5.0]);
    }
}
