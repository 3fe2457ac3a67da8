//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use worldstore_domain::error::{ValidationError, WorldStoreError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WorldStoreError`] to an HTTP response with appropriate status code.
///
/// Validation failures are client errors (400, or 413 for an oversized
/// body); storage failures are 500.
///
/// The body is always `{"error": "<message>"}` carrying the error text,
/// storage failures included.
#[derive(Debug)]
pub struct ApiError(WorldStoreError);

impl From<WorldStoreError> for ApiError {
    fn from(err: WorldStoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            WorldStoreError::Validation(err) => {
                tracing::warn!(error = %err, "rejected world document");
                match err {
                    ValidationError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
                    _ => StatusCode::BAD_REQUEST,
                }
            }
            WorldStoreError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
