use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use completion_client::CompletionError;

/// Shown to callers when the completion endpoint could not be used.
pub const FETCH_ERROR_DETAIL: &str = "Error fetching AI response";

const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// The underlying cause is logged; the response body only ever carries a
/// generic `{"detail": ...}` message.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = if self.0.downcast_ref::<CompletionError>().is_some() {
            tracing::error!("Error connecting to completion API: {:#}", self.0);
            FETCH_ERROR_DETAIL
        } else {
            tracing::error!("Unhandled error: {:#}", self.0);
            INTERNAL_ERROR_DETAIL
        };

        let body = serde_json::json!({ "detail": detail });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
