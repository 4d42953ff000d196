use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use trv_db::StoreError;

/// API failure taxonomy.
///
/// Quiz exhaustion is deliberately *not* here: running out of eligible
/// questions is a normal terminal condition and is reported as a successful
/// response with no question, so callers can end a session without treating
/// it as a missing resource.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested category, question, or page does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Syntactically valid input that cannot be processed (unknown category
    /// on create, unknown question id on delete, out-of-range difficulty).
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable, client-facing wording. The variant payload stays in the logs.
    const fn message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource not found",
            Self::Unprocessable(_) => "unprocessable",
            Self::Store(_) => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(err) => tracing::error!("store failure: {err}"),
            Self::NotFound(detail) | Self::Unprocessable(detail) => {
                tracing::debug!("request rejected: {detail}");
            }
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));
        (status, body).into_response()
    }
}
