//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Object storage credentials are missing or were rejected.
    #[error("Storage credentials unavailable: {0}")]
    StorageCredentials(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Object storage or filesystem error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::StorageCredentials(_) => 503,
            Self::Database(_) | Self::Storage(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::StorageCredentials(_) => "STORAGE_CREDENTIALS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the message is safe to show to clients.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
