//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and service errors, and provides semantic variants
//! for credential loading failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("NLU service error: {0}")]
    Nlu(#[from] crate::nlu::NluError),

    #[error("credential file parse error: {0}")]
    CredentialFormat(#[from] serde_json::Error),
}

impl Error {
    /// True when the error is the fatal usage-quota condition from the service.
    pub fn is_quota(&self) -> bool {
        matches!(self, Error::Nlu(e) if e.is_quota())
    }
}
