use std::path::PathBuf;

use thiserror::Error;

use sentiscan::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unable to set up credentials: {0}")]
    Credentials(String),

    #[error("Stats mode expects a dataset directory, got: {0:?}")]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lib(#[from] sentiscan::Error),
}

impl AppError {
    /// Process exit code for this error: 2 when no usable credentials exist,
    /// 3 when the service quota is exhausted mid-run, 4 for a scoring failure
    /// on a single-shot input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Credentials(_) => 2,
            AppError::Lib(Error::Nlu(e)) if e.is_quota() => 3,
            AppError::Lib(Error::Nlu(_)) => 4,
            _ => 1,
        }
    }
}
