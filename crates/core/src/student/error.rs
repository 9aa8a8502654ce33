//! Student error types.

use estudiantes_shared::AppError;
use thiserror::Error;

use super::validation::ValidationError;
use crate::storage::StorageError;

/// Student operation errors.
#[derive(Debug, Error)]
pub enum StudentError {
    /// Submitted form was incomplete or malformed.
    #[error("invalid form: {0}")]
    Validation(#[from] ValidationError),

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl StudentError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    /// Whether the failure was the object store refusing our credentials.
    #[must_use]
    pub fn is_credentials(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_credentials())
    }
}

impl From<StudentError> for AppError {
    fn from(err: StudentError) -> Self {
        match err {
            StudentError::Validation(e) => Self::Validation(e.to_string()),
            StudentError::Storage(StorageError::Credentials(msg)) => Self::StorageCredentials(msg),
            StudentError::Storage(e @ StorageError::FileTooLarge { .. }) => {
                Self::Validation(e.to_string())
            }
            StudentError::Storage(e) => Self::Storage(e.to_string()),
            StudentError::Repository(msg) => Self::Database(msg),
        }
    }
}
