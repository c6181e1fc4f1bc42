use std::fmt::Debug;

use crate::error::{MatVecError, Result};

/// Trait for pluggable matrix-vector backends (serial, threaded).
///
/// Data is passed as row-major slices. The caller owns the output buffer so
/// that allocation stays outside any timed compute interval.
pub trait MatVecBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "serial", "threaded").
    fn name(&self) -> &str;

    /// Matrix-vector product: y = A @ x.
    ///
    /// - `a`: row-major data of shape [m, n]
    /// - `x`: data of shape [n, 1]
    /// - `y`: output buffer of length m; every element is overwritten
    /// - `n`: column count of `a`; m is taken from `y.len()`
    fn matvec_into(&self, a: &[f64], x: &[f64], y: &mut [f64], n: usize) -> Result<()>;

    /// Matrix-vector product returning a freshly allocated output of length `m`.
    fn matvec(&self, a: &[f64], x: &[f64], m: usize, n: usize) -> Result<Vec<f64>> {
        let mut y = crate::error::try_zeroed("result vector", m)?;
        self.matvec_into(a, x, &mut y, n)?;
        Ok(y)
    }
}

/// Checks that `a`, `x` and `y` have the lengths implied by `y.len()` x `n`.
pub(crate) fn check_buffers(a: &[f64], x: &[f64], y: &[f64], n: usize) -> Result<()> {
    let m = y.len();
    let expected_a = m.checked_mul(n).ok_or(MatVecError::ShapeMismatch {
        what: "matrix A",
        expected: usize::MAX,
        got: a.len(),
    })?;
    if a.len() != expected_a {
        return Err(MatVecError::ShapeMismatch {
            what: "matrix A",
            expected: expected_a,
            got: a.len(),
        });
    }
    if x.len() != n {
        return Err(MatVecError::ShapeMismatch {
            what: "vector x",
            expected: n,
            got: x.len(),
        });
    }
    Ok(())
}
