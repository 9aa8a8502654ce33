//! Shared errors and configuration for Estudiantes.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, StorageSettings};
pub use error::AppError;
