use std::fmt;

use mv_core::Matrix;

/// Human-readable rendering of a matrix.
///
/// The first line is `Matrix: R x C`; each following line is one row with
/// every value zero-padded to five characters and two decimals, each
/// followed by a single space.
pub struct MatrixDisplay<'a>(pub &'a Matrix);

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        writeln!(f, "Matrix: {}", m.shape())?;
        for i in 0..m.rows() {
            for v in m.row(i) {
                write!(f, "{v:05.2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
