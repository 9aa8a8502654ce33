//! Storage service implementation using Apache OpenDAL.

use std::future::Future;

use bytes::Bytes;
use opendal::{Operator, services};

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// Key-addressed blob store used for student photos.
///
/// Implemented by [`StorageService`]; the student service only talks to this
/// trait so either side of an upload can be swapped out.
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key`, replacing any previous object.
    fn put_object(
        &self,
        key: &str,
        data: Bytes,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove the object stored under `key`.
    fn delete_object(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Check whether an object exists under `key`.
    fn object_exists(&self, key: &str) -> impl Future<Output = bool> + Send;
}

/// Storage service for student photos.
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        let operator = match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let mut builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .region(region);

                // Empty keys leave credential discovery to the environment.
                if !access_key_id.is_empty() && !secret_access_key.is_empty() {
                    builder = builder
                        .access_key_id(access_key_id)
                        .secret_access_key(secret_access_key);
                }

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
            }
            StorageProvider::Memory => Operator::new(services::Memory::default())
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish(),
        };

        Ok(operator)
    }

    /// Validate an upload against the configured size limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is larger than allowed.
    pub fn validate_upload(&self, size: usize) -> Result<(), StorageError> {
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }
        Ok(())
    }

    /// Write a file to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is too large or the write fails.
    pub async fn write(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        self.validate_upload(data.len())?;
        self.operator
            .write(key, data)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Read a file from storage.
    #[cfg(test)]
    async fn read(&self, key: &str) -> Result<Bytes, StorageError> {
        let buffer = self.operator.read(key).await.map_err(StorageError::from)?;
        Ok(buffer.to_bytes())
    }

    /// Delete a file from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.operator.delete(key).await.map_err(StorageError::from)
    }

    /// Check if a file exists in storage.
    pub async fn exists(&self, key: &str) -> bool {
        self.operator.stat(key).await.is_ok()
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        self.config.provider.bucket()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

impl ObjectStore for StorageService {
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        self.write(key, data).await
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        self.delete(key).await
    }

    async fn object_exists(&self, key: &str) -> bool {
        self.exists(key).await
    }
}
