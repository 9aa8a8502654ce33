//! Presence validation for submitted student forms.

use std::collections::HashMap;

use thiserror::Error;

use super::types::{PhotoUpload, StudentFields};

/// Form validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was not submitted.
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// The record id is not an integer.
    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// Raw form submission: text fields plus an optional file.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    values: HashMap<String, String>,
    photo: Option<PhotoUpload>,
}

impl StudentForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a text field. Later values for the same name win.
    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`Self::insert_text`].
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_text(name, value);
        self
    }

    /// Record the file input. Empty inputs are treated as "no file".
    pub fn set_photo(&mut self, photo: PhotoUpload) {
        self.photo = (!photo.is_empty()).then_some(photo);
    }

    /// Builder-style variant of [`Self::set_photo`].
    #[must_use]
    pub fn with_photo(mut self, photo: PhotoUpload) -> Self {
        self.set_photo(photo);
        self
    }

    /// The uploaded photo, if one was sent.
    #[must_use]
    pub fn photo(&self) -> Option<&PhotoUpload> {
        self.photo.as_ref()
    }

    /// Take ownership of the uploaded photo.
    pub fn take_photo(&mut self) -> Option<PhotoUpload> {
        self.photo.take()
    }

    fn required(&self, name: &'static str) -> Result<String, ValidationError> {
        self.values
            .get(name)
            .cloned()
            .ok_or(ValidationError::MissingField(name))
    }

    /// Extract the five text fields.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, in form order.
    pub fn fields(&self) -> Result<StudentFields, ValidationError> {
        Ok(StudentFields {
            name: self.required("nombre")?,
            age: self.required("edad")?,
            national_id: self.required("dni")?,
            phone: self.required("telefono")?,
            grade: self.required("grado")?,
        })
    }

    /// Extract the record id.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is missing or not an integer.
    pub fn id(&self) -> Result<i64, ValidationError> {
        let raw = self.required("id")?;
        raw.trim()
            .parse()
            .map_err(|_| ValidationError::InvalidId(raw))
    }
}
