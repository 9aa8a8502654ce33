//! Student records and the photo lifecycle.
//!
//! This module provides:
//! - Student domain types and form validation
//! - Unique photo filename generation
//! - Repository traits implemented by the db crate
//! - `StudentService`, which ties records to their stored photos

mod error;
mod filename;
mod service;
mod types;
mod validation;

pub use error::StudentError;
pub use filename::{key_from_url, sanitize_filename, unique_filename};
pub use service::{IdSequence, STUDENT_SEQUENCE, StudentRepository, StudentService};
pub use types::{
    CleanupStatus, DeleteOutcome, PhotoCleanup, PhotoRef, PhotoUpload, Student, StudentFields,
};
pub use validation::{StudentForm, ValidationError};
