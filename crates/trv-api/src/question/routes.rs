use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use trv_db::store::QuestionStore;

use crate::error::ApiError;
use crate::state::ApiState;

use super::model::{Created, Deleted, PageQuery, QuestionList, QuestionPost};
use super::service;

/// Create the question routes
pub fn routes<S: QuestionStore>() -> Router<ApiState<S>> {
    Router::new()
        .route(
            "/questions",
            get(get_questions::<S>).post(post_questions::<S>),
        )
        .route("/questions/{id}", delete(delete_question::<S>))
}

/// Paginated list of every question
async fn get_questions<S: QuestionStore>(
    State(state): State<ApiState<S>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let list = service::list_questions(&state.store, query.page).await?;
    Ok(Json(list))
}

/// Unified create-or-search endpoint, dispatched on `searchTerm`
async fn post_questions<S: QuestionStore>(
    State(state): State<ApiState<S>>,
    Query(query): Query<PageQuery>,
    Json(body): Json<QuestionPost>,
) -> Result<Response, ApiError> {
    if let Some(term) = body.search_term {
        let results = service::search_questions(&state.store, &term, query.page).await?;
        return Ok(Json(results).into_response());
    }

    let id = service::create_question(&state.store, body.into_new_question()?).await?;
    Ok(Json(Created {
        success: true,
        id_question: id,
    })
    .into_response())
}

/// Delete a question by id
async fn delete_question<S: QuestionStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = service::delete_question(&state.store, id).await?;
    Ok(Json(Deleted {
        success: true,
        deleted,
    }))
}
