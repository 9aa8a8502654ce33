//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File size exceeds maximum allowed.
    #[error("file size {size} bytes exceeds maximum allowed {max} bytes")]
    FileTooLarge {
        /// Actual file size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Credentials for the provider are missing or were rejected.
    #[error("storage credentials not available: {0}")]
    Credentials(String),

    /// File not found in storage.
    #[error("file not found: {key}")]
    NotFound {
        /// Storage key that was not found.
        key: String,
    },

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("storage operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create a file too large error.
    #[must_use]
    pub fn file_too_large(size: usize, max: usize) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Create a credentials error.
    #[must_use]
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an operation error.
    #[must_use]
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }

    /// Whether this error means the provider could not authenticate.
    #[must_use]
    pub fn is_credentials(&self) -> bool {
        matches!(self, Self::Credentials(_))
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound {
                key: err.to_string(),
            },
            opendal::ErrorKind::PermissionDenied | opendal::ErrorKind::ConfigInvalid => {
                Self::Credentials(err.to_string())
            }
            _ => Self::Operation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_maps_to_credentials() {
        let err = opendal::Error::new(opendal::ErrorKind::PermissionDenied, "no credential");
        assert!(StorageError::from(err).is_credentials());
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err = opendal::Error::new(opendal::ErrorKind::NotFound, "missing");
        assert!(matches!(
            StorageError::from(err),
            StorageError::NotFound { .. }
        ));
    }

    #[test]
    fn test_other_kinds_map_to_operation() {
        let err = opendal::Error::new(opendal::ErrorKind::Unexpected, "boom");
        let mapped = StorageError::from(err);
        assert!(matches!(mapped, StorageError::Operation(_)));
        assert!(!mapped.is_credentials());
    }
}
