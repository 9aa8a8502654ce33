//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Student CRUD routes
//! - Multipart form extraction
//! - Flash messages carried in a cookie
//! - Error responses

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use estudiantes_core::storage::{ObjectStore, StorageService};
use estudiantes_core::student::StudentService;
use estudiantes_db::{SequenceRepository, StudentRepository};

/// Room left in the request body for the text fields around the photo.
const FORM_OVERHEAD: usize = 64 * 1024;

/// Student service as wired for HTTP handlers.
pub type Students<O = StorageService> = StudentService<StudentRepository, SequenceRepository, O>;

/// Application state shared across handlers.
pub struct AppState<O = StorageService> {
    /// Student service, built once at startup.
    pub students: Arc<Students<O>>,
    /// Largest accepted photo, in bytes.
    pub max_file_size: usize,
}

impl<O> Clone for AppState<O> {
    fn clone(&self) -> Self {
        Self {
            students: self.students.clone(),
            max_file_size: self.max_file_size,
        }
    }
}

impl<O: ObjectStore> AppState<O> {
    /// Wire the student service over a database pool and the two photo stores.
    #[must_use]
    pub fn new(
        db: Arc<DatabaseConnection>,
        staging: Arc<O>,
        storage: Arc<O>,
        max_file_size: usize,
    ) -> Self {
        let students = StudentService::new(
            Arc::new(StudentRepository::new(db.clone())),
            Arc::new(SequenceRepository::new(db)),
            staging,
            storage,
        );
        Self {
            students: Arc::new(students),
            max_file_size,
        }
    }
}

/// Creates the main application router.
pub fn create_router<O: ObjectStore + 'static>(state: AppState<O>) -> Router {
    let body_limit = state.max_file_size + FORM_OVERHEAD;

    Router::new()
        .merge(routes::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
