use thiserror::Error;

use mv_core::MatVecError;
use mv_io::MatrixFileError;

/// Every way a tool invocation can fail. All of them are fatal.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to read {role}: {source}")]
    Read {
        role: &'static str,
        #[source]
        source: MatrixFileError,
    },
    #[error("failed to write result: {0}")]
    Write(#[source] MatrixFileError),
    #[error(transparent)]
    File(#[from] MatrixFileError),
    #[error(transparent)]
    Compute(#[from] MatVecError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
