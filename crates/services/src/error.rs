//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, SessionStepError};
use storage::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Invalid(#[from] QuestionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the session lifecycle.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no such session")]
    Missing,
    #[error("session already completed ({position}/{total})")]
    OutOfRange { position: usize, total: usize },
    #[error("catalog has no question at index {index}")]
    QuestionMissing { index: usize },
    #[error(transparent)]
    Step(SessionStepError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionStepError> for SessionError {
    fn from(err: SessionStepError) -> Self {
        match err {
            SessionStepError::OutOfRange { position, total } => {
                SessionError::OutOfRange { position, total }
            }
            other => SessionError::Step(other),
        }
    }
}
