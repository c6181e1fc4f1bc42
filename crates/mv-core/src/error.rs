use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug)]
pub enum MatVecError {
    #[error("x must be a column vector (x is {shape}, should have 1 column)")]
    NotColumnVector { shape: Shape },
    #[error("incompatible dimensions: matrix A is {matrix}, vector x is {vector}")]
    DimensionMismatch { matrix: Shape, vector: Shape },
    #[error("buffer length mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("shape {shape} has more elements than can be addressed")]
    ShapeOverflow { shape: Shape },
    #[error("number of workers must be positive, got {0}")]
    InvalidWorkerCount(usize),
    #[error("cannot allocate memory for {what} ({elements} elements)")]
    Allocation { what: &'static str, elements: usize },
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("worker {worker} panicked during computation")]
    WorkerPanicked { worker: usize },
}

pub type Result<T> = std::result::Result<T, MatVecError>;

/// Allocate a zero-filled buffer, reporting allocation failure as an error
/// instead of aborting the process.
pub fn try_zeroed(what: &'static str, elements: usize) -> Result<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(elements)
        .map_err(|_| MatVecError::Allocation { what, elements })?;
    buf.resize(elements, 0.0);
    Ok(buf)
}
