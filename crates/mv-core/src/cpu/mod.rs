pub mod kernel;

use crate::backend::{check_buffers, MatVecBackend};
use crate::error::Result;

/// Single-threaded CPU backend.
///
/// Runs the row kernel over every row on the calling thread. This is the
/// correctness oracle for the threaded backend.
#[derive(Debug, Clone)]
pub struct SerialBackend;

impl SerialBackend {
    pub fn new() -> Self {
        SerialBackend
    }
}

impl Default for SerialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MatVecBackend for SerialBackend {
    fn name(&self) -> &str {
        "serial"
    }

    fn matvec_into(&self, a: &[f64], x: &[f64], y: &mut [f64], n: usize) -> Result<()> {
        check_buffers(a, x, y, n)?;
        kernel::matvec_serial(a, n, x, y);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatVecError;

    fn backend() -> SerialBackend {
        SerialBackend::new()
    }

    #[test]
    fn test_matvec_identity() {
        let b = backend();
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let x = vec![3.0, 4.0];
        let y = b.matvec(&a, &x, 2, 2).unwrap();
        assert_eq!(y, vec![3.0, 4.0]);
    }

    #[test]
    fn test_matvec_basic() {
        let b = backend();
        // [1,2,3;4,5,6] @ [1;1;1] = [6;15]
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = vec![1.0, 1.0, 1.0];
        let y = b.matvec(&a, &x, 2, 3).unwrap();
        assert_eq!(y, vec![6.0, 15.0]);
    }

    #[test]
    fn test_matvec_single_row() {
        let b = backend();
        let y = b.matvec(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0], 1, 3).unwrap();
        assert_eq!(y, vec![10.0]);
    }

    #[test]
    fn test_matvec_bad_lengths() {
        let b = backend();
        let err = b.matvec(&[1.0, 2.0, 3.0], &[1.0, 1.0], 1, 2).unwrap_err();
        assert!(matches!(err, MatVecError::ShapeMismatch { what: "matrix A", .. }));

        let err = b.matvec(&[1.0, 2.0], &[1.0], 1, 2).unwrap_err();
        assert!(matches!(err, MatVecError::ShapeMismatch { what: "vector x", .. }));
    }

    #[test]
    fn test_name() {
        assert_eq!(backend().name(), "serial");
    }
}
