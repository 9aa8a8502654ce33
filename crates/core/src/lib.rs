//! Core business logic for Estudiantes.
//!
//! This crate contains the domain logic with ZERO web or database dependencies.
//! Persistence is reached through the repository traits in [`student`], which
//! the db crate implements.
//!
//! # Modules
//!
//! - `storage` - Object storage for student photos (S3, local staging)
//! - `student` - Student records, form validation and the photo lifecycle

pub mod storage;
pub mod student;
