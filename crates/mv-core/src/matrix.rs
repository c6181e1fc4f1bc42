use crate::backend::MatVecBackend;
use crate::error::{MatVecError, Result};
use crate::shape::Shape;

/// A dense matrix of f64 values.
///
/// Holds contiguous, row-major data with an associated shape. The data is
/// immutable once constructed, so a `&Matrix` can be shared freely between
/// worker threads. Products are dispatched to a `MatVecBackend`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    /// Create a new matrix from row-major data and a shape.
    ///
    /// Fails if `data.len()` does not equal `rows * cols`.
    pub fn new(data: Vec<f64>, shape: Shape) -> Result<Self> {
        let expected = shape
            .checked_numel()
            .ok_or(MatVecError::ShapeOverflow { shape })?;
        if data.len() != expected {
            return Err(MatVecError::ShapeMismatch {
                what: "matrix data",
                expected,
                got: data.len(),
            });
        }
        Ok(Matrix { data, shape })
    }

    /// Create an `n`x1 column vector.
    pub fn column(data: Vec<f64>) -> Self {
        let shape = Shape::column(data.len());
        Matrix { data, shape }
    }

    /// Create a zero-filled matrix, reporting allocation failure as an error.
    pub fn zeros(shape: Shape, what: &'static str) -> Result<Self> {
        let n = shape
            .checked_numel()
            .ok_or(MatVecError::ShapeOverflow { shape })?;
        let data = crate::error::try_zeroed(what, n)?;
        Ok(Matrix { data, shape })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns row `i` as a slice of `cols` elements.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.cols();
        &self.data[i * n..(i + 1) * n]
    }

    /// Checks that `x` can be multiplied on the right of `self`.
    ///
    /// `x` must be a column vector whose length equals `self.cols()`.
    pub fn check_matvec(&self, x: &Matrix) -> Result<()> {
        if !x.shape.is_column_vector() {
            return Err(MatVecError::NotColumnVector { shape: x.shape });
        }
        if self.cols() != x.rows() {
            return Err(MatVecError::DimensionMismatch {
                matrix: self.shape,
                vector: x.shape,
            });
        }
        Ok(())
    }

    /// Matrix-vector product `self @ x` using the given backend.
    ///
    /// self is [m, n], x is [n, 1], result is [m, 1].
    pub fn matvec(&self, x: &Matrix, backend: &dyn MatVecBackend) -> Result<Matrix> {
        self.check_matvec(x)?;
        let mut y = Matrix::zeros(Shape::column(self.rows()), "result vector")?;
        backend.matvec_into(&self.data, &x.data, &mut y.data, self.cols())?;
        Ok(y)
    }
}
