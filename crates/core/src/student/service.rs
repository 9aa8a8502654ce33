//! Student service implementation.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::StudentError;
use super::filename::unique_filename;
use super::types::{
    CleanupStatus, DeleteOutcome, PhotoCleanup, PhotoRef, PhotoUpload, Student, StudentFields,
};
use crate::storage::{ObjectStore, StorageError};

/// Name of the counter that hands out student ids.
pub const STUDENT_SEQUENCE: &str = "estudiantes";

/// Repository trait for student persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait StudentRepository: Send + Sync {
    /// List all students in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<Student>, StudentError>> + Send;

    /// Find student by ID.
    fn find_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Student>, StudentError>> + Send;

    /// Insert a fully formed record, id included.
    fn insert(&self, student: Student) -> impl Future<Output = Result<(), StudentError>> + Send;

    /// Overwrite the text fields and, when given, the photo columns.
    ///
    /// Returns the number of matched rows; zero when the id does not exist.
    fn update(
        &self,
        id: i64,
        fields: StudentFields,
        photo: Option<PhotoRef>,
    ) -> impl Future<Output = Result<u64, StudentError>> + Send;

    /// Delete student by ID.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, StudentError>> + Send;
}

/// Named counters with atomic increment-and-read.
pub trait IdSequence: Send + Sync {
    /// Increment the counter called `name` and return the new value.
    ///
    /// Counters start at zero, so the first value handed out is 1.
    fn next_value(&self, name: &str) -> impl Future<Output = Result<i64, StudentError>> + Send;
}

/// Student service for records and their photos.
pub struct StudentService<R, Q, O> {
    repo: Arc<R>,
    sequence: Arc<Q>,
    staging: Arc<O>,
    remote: Arc<O>,
}

impl<R, Q, O> StudentService<R, Q, O>
where
    R: StudentRepository,
    Q: IdSequence,
    O: ObjectStore,
{
    /// Create a new student service.
    #[must_use]
    pub fn new(repo: Arc<R>, sequence: Arc<Q>, staging: Arc<O>, remote: Arc<O>) -> Self {
        Self {
            repo,
            sequence,
            staging,
            remote,
        }
    }

    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self) -> Result<Vec<Student>, StudentError> {
        self.repo.list().await
    }

    /// Create a student, storing the photo first when one is given.
    ///
    /// No id is consumed and no record is written when the photo upload fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The photo cannot be staged or uploaded
    /// - The sequence or the insert fails
    pub async fn insert(
        &self,
        fields: StudentFields,
        upload: Option<PhotoUpload>,
    ) -> Result<Student, StudentError> {
        let photo = match upload {
            Some(upload) => Some(self.store_photo(upload).await?),
            None => None,
        };

        let id = self.sequence.next_value(STUDENT_SEQUENCE).await?;
        let student = Student::new(id, fields, photo);
        self.repo.insert(student.clone()).await?;

        info!(
            student_id = id,
            image = student.image_key.as_deref().unwrap_or("-"),
            "Student inserted"
        );
        Ok(student)
    }

    /// Replace a student's fields, and its photo when a new one is given.
    ///
    /// There is no existence check: an unknown id matches zero rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the new photo cannot be stored or the update fails.
    pub async fn update(
        &self,
        id: i64,
        fields: StudentFields,
        upload: Option<PhotoUpload>,
    ) -> Result<u64, StudentError> {
        let photo = match upload {
            Some(upload) => Some(self.store_photo(upload).await?),
            None => None,
        };

        let matched = self.repo.update(id, fields, photo).await?;
        if matched == 0 {
            debug!(student_id = id, "Update matched no student");
        } else {
            info!(student_id = id, "Student updated");
        }
        Ok(matched)
    }

    /// Delete a student and, best effort, its photo.
    ///
    /// Photo cleanup never prevents the row from being deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup or the row deletion fails.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, StudentError> {
        let existing = self.repo.find_by_id(id).await?;

        let photo = match existing.as_ref().and_then(Student::photo_key) {
            Some(key) => Some(self.remove_photo(key).await),
            None => None,
        };

        let deleted = self.repo.delete(id).await?;
        info!(student_id = id, deleted, "Student deleted");

        Ok(DeleteOutcome { deleted, photo })
    }

    /// Stage a photo locally, then upload it under the same key.
    async fn store_photo(&self, upload: PhotoUpload) -> Result<PhotoRef, StudentError> {
        let key = unique_filename(&upload.original_name);

        self.staging.put_object(&key, upload.data.clone()).await?;

        if let Err(e) = self.remote.put_object(&key, upload.data).await {
            // The staged copy stays behind.
            warn!(key = %key, error = %e, "Photo upload failed after staging");
            return Err(e.into());
        }

        debug!(key = %key, "Photo stored");
        Ok(PhotoRef::new(key))
    }

    /// Remove a photo from the bucket, then from staging.
    async fn remove_photo(&self, key: String) -> PhotoCleanup {
        let remote = match self.remote.delete_object(&key).await {
            Ok(()) => CleanupStatus::Removed,
            Err(StorageError::Credentials(msg)) => {
                warn!(key = %key, error = %msg, "Photo delete rejected: no credentials");
                CleanupStatus::CredentialsUnavailable
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Photo delete failed");
                CleanupStatus::Failed(e.to_string())
            }
        };

        let local = match self.staging.delete_object(&key).await {
            Ok(()) => CleanupStatus::Removed,
            Err(e) => {
                warn!(key = %key, error = %e, "Staged photo could not be removed");
                CleanupStatus::Failed(e.to_string())
            }
        };

        PhotoCleanup { key, remote, local }
    }
}
