use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use trv_db::store::QuestionStore;

use crate::error::ApiError;
use crate::state::ApiState;
use crate::{category, question, quiz};

pub fn router<S: QuestionStore>() -> Router<ApiState<S>> {
    Router::new()
        .route("/health", get(health))
        .merge(category::routes())
        .merge(question::routes())
        .merge(quiz::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
