//! Route definitions.

use axum::Router;

use estudiantes_core::storage::ObjectStore;

use crate::AppState;

pub mod health;
pub mod pages;
pub mod students;

/// Creates the router with all routes.
pub fn routes<O: ObjectStore + 'static>() -> Router<AppState<O>> {
    Router::new()
        .merge(pages::routes())
        .merge(health::routes())
        .merge(students::routes::<O>())
}
