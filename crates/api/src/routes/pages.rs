//! Static landing page.

use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>Estudiantes</title>
</head>
<body>
  <h1>Estudiantes</h1>
  <p><a href="/estudiantes">Ver estudiantes</a></p>
</body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Creates page routes.
pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/", get(index))
}
