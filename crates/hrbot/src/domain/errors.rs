//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failures talking to the inference backend
///
/// Carries full detail for server-side logs. Never rendered to API clients.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Inference backend unreachable: {0}")]
    Unreachable(String),

    #[error("Inference backend timed out: {0}")]
    Timeout(String),

    #[error("Inference backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response from inference backend: {0}")]
    MalformedResponse(String),

    #[error("Failed to pull model {model}: {message}")]
    PullFailed { model: String, message: String },
}

impl BackendError {
    pub fn status<T: Into<String>>(status: u16, message: T) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn pull_failed<T: AsRef<str>, M: Into<String>>(model: T, message: M) -> Self {
        Self::PullFailed {
            model: model.as_ref().to_string(),
            message: message.into(),
        }
    }
}
