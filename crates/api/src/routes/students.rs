//! Student record routes.
//!
//! Mutating routes answer with `303 See Other` back to the list and leave a
//! flash message for it to show.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use tracing::warn;

use estudiantes_core::storage::ObjectStore;
use estudiantes_core::student::Student;

use crate::{
    AppState,
    error::ApiError,
    extractors::StudentFormData,
    flash::{self, Flash, FlashMessage},
};

/// Path of the list view, target of every redirect.
pub const LIST_PATH: &str = "/estudiantes";

/// Creates the student routes.
pub fn routes<O: ObjectStore + 'static>() -> Router<AppState<O>> {
    Router::new()
        .route(LIST_PATH, get(list_students::<O>))
        .route("/insert", post(insert_student::<O>))
        .route("/update", post(update_student::<O>))
        .route("/delete/{id}", get(delete_student::<O>))
}

/// Collection view of all students.
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    /// Messages left by the previous request.
    pub flashes: Vec<FlashMessage>,
    /// Students in id order.
    pub estudiantes: Vec<Student>,
}

type FlashRedirect = (CookieJar, Redirect);

fn redirect_with(jar: CookieJar, message: Flash) -> FlashRedirect {
    (flash::push(jar, message), Redirect::to(LIST_PATH))
}

async fn list_students<O: ObjectStore>(
    State(state): State<AppState<O>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<StudentListResponse>), ApiError> {
    let estudiantes = state.students.list().await?;
    let (jar, flashes) = flash::take(jar);

    Ok((
        jar,
        Json(StudentListResponse {
            flashes,
            estudiantes,
        }),
    ))
}

async fn insert_student<O: ObjectStore>(
    State(state): State<AppState<O>>,
    jar: CookieJar,
    StudentFormData(mut form): StudentFormData,
) -> Result<FlashRedirect, ApiError> {
    let fields = form.fields()?;
    let photo = form.take_photo();

    match state.students.insert(fields, photo).await {
        Ok(_) => Ok(redirect_with(jar, Flash::Inserted)),
        Err(e) if e.is_credentials() => {
            warn!(error = %e, "Insert aborted: object store credentials unavailable");
            Ok(redirect_with(jar, Flash::CredentialsUnavailable))
        }
        Err(e) => Err(e.into()),
    }
}

async fn update_student<O: ObjectStore>(
    State(state): State<AppState<O>>,
    jar: CookieJar,
    StudentFormData(mut form): StudentFormData,
) -> Result<FlashRedirect, ApiError> {
    let id = form.id()?;
    let fields = form.fields()?;
    let photo = form.take_photo();

    match state.students.update(id, fields, photo).await {
        Ok(_) => Ok(redirect_with(jar, Flash::Updated)),
        Err(e) if e.is_credentials() => {
            warn!(student_id = id, error = %e, "Update aborted: object store credentials unavailable");
            Ok(redirect_with(jar, Flash::CredentialsUnavailable))
        }
        Err(e) => Err(e.into()),
    }
}

async fn delete_student<O: ObjectStore>(
    State(state): State<AppState<O>>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<FlashRedirect, ApiError> {
    let outcome = state.students.delete(id).await?;

    let jar = if outcome.credentials_unavailable() {
        flash::push(jar, Flash::CredentialsUnavailable)
    } else {
        jar
    };

    Ok(redirect_with(jar, Flash::Deleted))
}
