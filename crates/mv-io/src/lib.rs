//! `mv-io` - the binary matrix file format shared by every matvec tool.
//!
//! A file holds an 8-byte header (row and column counts as native-endian
//! `i32`) followed by `rows * cols` native-endian `f64` values in row-major
//! order. Vectors are stored as matrices with one column.

pub mod display;
pub mod error;
pub mod generate;
pub mod header;
pub mod reader;
pub mod writer;

pub use display::MatrixDisplay;
pub use error::{MatrixFileError, Result};
pub use generate::random_matrix;
pub use header::{MatrixHeader, HEADER_LEN};
pub use reader::read_matrix;
pub use writer::{write_matrix, write_vector};
