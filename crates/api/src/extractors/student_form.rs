use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};

use estudiantes_core::student::{PhotoUpload, StudentForm};
use estudiantes_shared::AppError;

use crate::error::ApiError;

/// Form field carrying the photo file.
pub const PHOTO_FIELD: &str = "imagen";

/// A submitted student form, read from either `multipart/form-data` or
/// `application/x-www-form-urlencoded`.
///
/// Malformed bodies are rejected with a validation error.
pub struct StudentFormData(pub StudentForm);

impl<S> FromRequest<S> for StudentFormData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return read_multipart(multipart).await.map(Self);
        }

        let Form(values) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        let mut form = StudentForm::new();
        for (name, value) in values {
            form.insert_text(name, value);
        }
        Ok(Self(form))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_multipart(mut multipart: Multipart) -> Result<StudentForm, ApiError> {
    let mut form = StudentForm::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == PHOTO_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            form.set_photo(PhotoUpload::new(file_name, data));
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            form.insert_text(name, value);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    const BOUNDARY: &str = "X-STUDENT-BOUNDARY";

    fn multipart_request(body: String) -> Request {
        Request::builder()
            .method("POST")
            .uri("/insert")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_part(file_name: &str, contents: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{PHOTO_FIELD}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n{contents}\r\n"
        )
    }

    #[tokio::test]
    async fn test_reads_multipart_fields_and_photo() {
        let body = format!(
            "{}{}--{BOUNDARY}--\r\n",
            text_part("nombre", "Ana"),
            file_part("photo.png", "PNGDATA"),
        );

        let StudentFormData(form) = StudentFormData::from_request(multipart_request(body), &())
            .await
            .unwrap();

        assert!(matches!(
            form.fields(),
            Err(estudiantes_core::student::ValidationError::MissingField("edad"))
        ));
        let photo = form.photo().unwrap();
        assert_eq!(photo.original_name, "photo.png");
        assert_eq!(&photo.data[..], b"PNGDATA");
    }

    #[tokio::test]
    async fn test_empty_file_input_is_no_photo() {
        let body = format!(
            "{}{}--{BOUNDARY}--\r\n",
            text_part("nombre", "Ana"),
            file_part("", ""),
        );

        let StudentFormData(form) = StudentFormData::from_request(multipart_request(body), &())
            .await
            .unwrap();

        assert!(form.photo().is_none());
    }

    #[tokio::test]
    async fn test_reads_urlencoded_form() {
        let req = Request::builder()
            .method("POST")
            .uri("/update")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("id=7&nombre=Ana&edad=12&dni=1&telefono=2&grado=6to"))
            .unwrap();

        let StudentFormData(form) = StudentFormData::from_request(req, &()).await.unwrap();

        assert_eq!(form.id(), Ok(7));
        assert_eq!(form.fields().unwrap().grade, "6to");
        assert!(form.photo().is_none());
    }

    #[tokio::test]
    async fn test_rejects_unsupported_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/insert")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let result = StudentFormData::from_request(req, &()).await;

        assert!(matches!(result, Err(ApiError(AppError::Validation(_)))));
    }
}
