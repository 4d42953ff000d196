use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use trv_db::store::QuestionStore;

use crate::error::ApiError;
use crate::question::model::{PageQuery, QuestionList};
use crate::state::ApiState;

use super::model::CategoryList;
use super::service;

/// Create the category routes
pub fn routes<S: QuestionStore>() -> Router<ApiState<S>> {
    Router::new()
        .route("/categories", get(get_categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(get_questions_by_category::<S>),
        )
}

/// All categories as an id -> label map
async fn get_categories<S: QuestionStore>(
    State(state): State<ApiState<S>>,
) -> Result<Json<CategoryList>, ApiError> {
    let list = service::list_categories(&state.store).await?;
    Ok(Json(list))
}

/// Paginated questions for one category
async fn get_questions_by_category<S: QuestionStore>(
    State(state): State<ApiState<S>>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionList>, ApiError> {
    let list = service::list_by_category(&state.store, id, query.page).await?;
    Ok(Json(list))
}
