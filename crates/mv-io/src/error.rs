use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixFileError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid dimensions in file (rows={rows}, cols={cols})", .path.display())]
    InvalidDimensions { path: PathBuf, rows: i32, cols: i32 },
    #[error("{}: file truncated: expected {expected} bytes, found {actual}", .path.display())]
    Truncated {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
    #[error("matrix of {rows} x {cols} does not fit the file header")]
    TooLarge { rows: usize, cols: usize },
    #[error(transparent)]
    Core(#[from] mv_core::MatVecError),
}

impl MatrixFileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MatrixFileError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixFileError>;
