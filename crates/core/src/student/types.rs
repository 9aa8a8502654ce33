//! Student types and data structures.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::filename::key_from_url;

/// The five free-text fields of a student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    /// Full name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Age, kept as entered.
    #[serde(rename = "edad")]
    pub age: String,
    /// National identity document number.
    #[serde(rename = "dni")]
    pub national_id: String,
    /// Phone number.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// School grade.
    #[serde(rename = "grado")]
    pub grade: String,
}

/// Reference to a photo stored under a generated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    /// Object key, identical in staging and in the bucket.
    pub key: String,
    /// Public URL of the photo.
    pub url: String,
}

impl PhotoRef {
    /// Reference whose URL is the key itself.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            url: key.clone(),
            key,
        }
    }
}

/// A file received with a form submission.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename as sent by the client.
    pub original_name: String,
    /// File contents.
    pub data: Bytes,
}

impl PhotoUpload {
    /// Create an upload from its parts.
    #[must_use]
    pub fn new(original_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            original_name: original_name.into(),
            data: data.into(),
        }
    }

    /// A file input without a filename counts as no upload, whatever its body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original_name.is_empty()
    }
}

/// Student domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Sequential identifier.
    pub id: i64,
    /// Text fields.
    #[serde(flatten)]
    pub fields: StudentFields,
    /// Storage key of the photo.
    #[serde(rename = "imagen")]
    pub image_key: Option<String>,
    /// URL of the photo.
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

impl Student {
    /// Assemble a record from its parts.
    #[must_use]
    pub fn new(id: i64, fields: StudentFields, photo: Option<PhotoRef>) -> Self {
        let (image_key, image_url) = match photo {
            Some(photo) => (Some(photo.key), Some(photo.url)),
            None => (None, None),
        };
        Self {
            id,
            fields,
            image_key,
            image_url,
        }
    }

    /// Key of the stored photo, if any.
    ///
    /// Falls back to the URL's last path segment for rows without a key.
    #[must_use]
    pub fn photo_key(&self) -> Option<String> {
        self.image_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| self.image_url.as_deref().and_then(key_from_url))
    }
}

/// How one copy of a photo fared during cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStatus {
    /// Object removed (or already absent).
    Removed,
    /// Object store refused our credentials.
    CredentialsUnavailable,
    /// Any other failure.
    Failed(String),
}

/// Result of removing a record's photo from both stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCleanup {
    /// Key that was removed.
    pub key: String,
    /// Remote bucket outcome.
    pub remote: CleanupStatus,
    /// Local staging outcome.
    pub local: CleanupStatus,
}

/// Result of deleting a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether a row was removed.
    pub deleted: bool,
    /// Photo cleanup, when the record had a photo.
    pub photo: Option<PhotoCleanup>,
}

impl DeleteOutcome {
    /// Whether the bucket rejected the credentials while removing the photo.
    #[must_use]
    pub fn credentials_unavailable(&self) -> bool {
        self.photo
            .as_ref()
            .is_some_and(|p| p.remote == CleanupStatus::CredentialsUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> StudentFields {
        StudentFields {
            name: "Ana".into(),
            age: "12".into(),
            national_id: "40111222".into(),
            phone: "555-0101".into(),
            grade: "6to".into(),
        }
    }

    #[test]
    fn test_student_without_photo() {
        let student = Student::new(1, fields(), None);
        assert!(student.image_key.is_none());
        assert!(student.image_url.is_none());
        assert!(student.photo_key().is_none());
    }

    #[test]
    fn test_student_with_photo_uses_key_as_url() {
        let student = Student::new(2, fields(), Some(PhotoRef::new("abcphoto.png")));
        assert_eq!(student.image_key.as_deref(), Some("abcphoto.png"));
        assert_eq!(student.image_url.as_deref(), Some("abcphoto.png"));
        assert_eq!(student.photo_key().as_deref(), Some("abcphoto.png"));
    }

    #[test]
    fn test_photo_key_falls_back_to_url() {
        let mut student = Student::new(3, fields(), None);
        student.image_url = Some("https://cdn.example.com/fotos/legacy.jpg".into());
        assert_eq!(student.photo_key().as_deref(), Some("legacy.jpg"));
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let student = Student::new(4, fields(), Some(PhotoRef::new("k.png")));
        let json = serde_json::to_value(&student).expect("serializes");

        assert_eq!(json["id"], 4);
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["edad"], "12");
        assert_eq!(json["dni"], "40111222");
        assert_eq!(json["telefono"], "555-0101");
        assert_eq!(json["grado"], "6to");
        assert_eq!(json["imagen"], "k.png");
        assert_eq!(json["imagen_url"], "k.png");
    }

    #[test]
    fn test_serializes_missing_photo_as_null() {
        let json = serde_json::to_value(Student::new(5, fields(), None)).expect("serializes");
        assert!(json["imagen"].is_null());
        assert!(json["imagen_url"].is_null());
    }

    #[test]
    fn test_empty_upload() {
        assert!(PhotoUpload::new("", Vec::new()).is_empty());
        assert!(!PhotoUpload::new("photo.png", Vec::new()).is_empty());
    }

    #[test]
    fn test_nameless_upload_with_body_is_empty() {
        assert!(PhotoUpload::new("", b"\x89PNG".to_vec()).is_empty());
    }

    #[test]
    fn test_delete_outcome_credentials_flag() {
        let outcome = DeleteOutcome {
            deleted: true,
            photo: Some(PhotoCleanup {
                key: "k.png".into(),
                remote: CleanupStatus::CredentialsUnavailable,
                local: CleanupStatus::Removed,
            }),
        };
        assert!(outcome.credentials_unavailable());

        let outcome = DeleteOutcome {
            deleted: true,
            photo: None,
        };
        assert!(!outcome.credentials_unavailable());
    }
}
