use std::io::Write;

use mv_core::Shape;

/// Size in bytes of the file header: two native-endian `i32` counts.
pub const HEADER_LEN: usize = 8;

/// Size in bytes of one stored element.
pub const ELEMENT_LEN: usize = std::mem::size_of::<f64>();

/// Raw matrix file header as stored on disk.
///
/// Counts are kept signed so that corrupt headers can be reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixHeader {
    pub rows: i32,
    pub cols: i32,
}

impl MatrixHeader {
    /// Decode a header from the first `HEADER_LEN` bytes of `bytes`.
    ///
    /// Returns `None` if fewer than `HEADER_LEN` bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<MatrixHeader> {
        let rows: [u8; 4] = bytes.get(0..4)?.try_into().ok()?;
        let cols: [u8; 4] = bytes.get(4..8)?.try_into().ok()?;
        Some(MatrixHeader {
            rows: i32::from_ne_bytes(rows),
            cols: i32::from_ne_bytes(cols),
        })
    }

    /// Build a header for `shape`, or `None` if a count exceeds `i32::MAX`.
    pub fn for_shape(shape: Shape) -> Option<MatrixHeader> {
        Some(MatrixHeader {
            rows: i32::try_from(shape.rows()).ok()?,
            cols: i32::try_from(shape.cols()).ok()?,
        })
    }

    pub fn write(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(&self.rows.to_ne_bytes())?;
        writer.write_all(&self.cols.to_ne_bytes())
    }

    /// The shape described by this header, if both counts are positive.
    pub fn shape(&self) -> Option<Shape> {
        if self.rows <= 0 || self.cols <= 0 {
            return None;
        }
        Some(Shape::new(self.rows as usize, self.cols as usize))
    }

    /// Number of payload bytes following the header, or `None` if it does
    /// not fit in a `u64`. Negative counts contribute zero bytes.
    pub fn payload_len(&self) -> Option<u64> {
        (self.rows.max(0) as u64)
            .checked_mul(self.cols.max(0) as u64)?
            .checked_mul(ELEMENT_LEN as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_decode() {
        let header = MatrixHeader { rows: 5, cols: 10 };
        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_LEN);
        assert_eq!(&buf[0..4], &5i32.to_ne_bytes());
        assert_eq!(MatrixHeader::from_bytes(&buf), Some(header));
    }

    #[test]
    fn test_short_header() {
        assert_eq!(MatrixHeader::from_bytes(&[0u8; 7]), None);
        assert_eq!(MatrixHeader::from_bytes(&[]), None);
    }

    #[test]
    fn test_shape_rejects_non_positive() {
        assert_eq!(MatrixHeader { rows: 0, cols: 3 }.shape(), None);
        assert_eq!(MatrixHeader { rows: 3, cols: -1 }.shape(), None);
        assert_eq!(
            MatrixHeader { rows: 3, cols: 1 }.shape(),
            Some(Shape::column(3))
        );
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(MatrixHeader { rows: 5, cols: 10 }.payload_len(), Some(400));
        assert_eq!(MatrixHeader { rows: -5, cols: 10 }.payload_len(), Some(0));
        let max = MatrixHeader {
            rows: i32::MAX,
            cols: i32::MAX,
        };
        assert_eq!(max.payload_len(), None);
    }

    #[test]
    fn test_for_shape_overflow() {
        let too_big = Shape::new(i32::MAX as usize + 1, 1);
        assert_eq!(MatrixHeader::for_shape(too_big), None);
        assert_eq!(
            MatrixHeader::for_shape(Shape::new(2, 3)),
            Some(MatrixHeader { rows: 2, cols: 3 })
        );
    }
}
