use std::fmt;

/// The shape of a dense row-major matrix: `rows` x `cols`.
///
/// A vector is a matrix with a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a new shape from row and column counts.
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Shape of an `n`x1 column vector.
    pub fn column(n: usize) -> Self {
        Shape { rows: n, cols: 1 }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, or `None` if `rows * cols` overflows.
    pub fn checked_numel(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns true if this shape has exactly one column.
    pub fn is_column_vector(&self) -> bool {
        self.cols == 1
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shape() {
        let s = Shape::new(2, 3);
        assert_eq!(s.rows(), 2);
        assert_eq!(s.cols(), 3);
        assert_eq!(s.checked_numel(), Some(6));
        assert!(!s.is_column_vector());
    }

    #[test]
    fn test_column() {
        let s = Shape::column(5);
        assert_eq!(s, Shape::new(5, 1));
        assert!(s.is_column_vector());
    }

    #[test]
    fn test_checked_numel_overflow() {
        assert_eq!(Shape::new(usize::MAX, 2).checked_numel(), None);
        assert_eq!(Shape::new(4, 5).checked_numel(), Some(20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(10, 1).to_string(), "10 x 1");
    }
}
