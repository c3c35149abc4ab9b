use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error taxonomy shared by the server and the client layer.
///
/// `NotFound` surfaces as HTTP 404 with an error body. `Validation` only
/// ever arises from the client-side forms; the server trusts payloads as
/// given. Network failures are plain `anyhow` errors, logged by the client
/// and never retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
