//! Storage configuration types.

use std::path::PathBuf;

use estudiantes_shared::StorageSettings;

/// Storage provider configuration.
#[derive(Debug, Clone)]
pub enum StorageProvider {
    /// S3-compatible storage: AWS S3, Cloudflare R2, MinIO
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID. Empty defers to the provider's credential chain.
        access_key_id: String,
        /// Secret access key. Empty defers to the provider's credential chain.
        secret_access_key: String,
        /// AWS region.
        region: String,
    },
    /// Local filesystem directory
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// In-process memory (tests only)
    Memory,
}

impl StorageProvider {
    /// Create S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }

    /// Get the bucket name, or the root directory for local storage.
    #[must_use]
    pub fn bucket(&self) -> &str {
        match self {
            Self::S3 { bucket, .. } => bucket,
            Self::LocalFs { root } => root.to_str().unwrap_or("local"),
            Self::Memory => "memory",
        }
    }
}

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Maximum file size in bytes.
    pub max_file_size: usize,
}

impl StorageConfig {
    /// Default max file size: 16MB.
    pub const DEFAULT_MAX_FILE_SIZE: usize = 16 * 1024 * 1024;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Remote bucket configuration from application settings.
    #[must_use]
    pub fn remote(settings: &StorageSettings) -> Self {
        Self::new(StorageProvider::s3(
            settings.endpoint_or_default(),
            &settings.bucket,
            &settings.access_key,
            &settings.secret_key,
            &settings.region,
        ))
        .with_max_file_size(settings.max_file_size)
    }

    /// Local staging directory configuration from application settings.
    #[must_use]
    pub fn staging(settings: &StorageSettings) -> Self {
        Self::new(StorageProvider::local_fs(&settings.upload_dir))
            .with_max_file_size(settings.max_file_size)
    }
}
