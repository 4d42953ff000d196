use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trv_db::store::QuestionStore;

use crate::error::ApiError;
use crate::state::ApiState;

use super::model::{QuizRequest, QuizResponse};
use super::service;

/// Create the quiz routes
pub fn routes<S: QuestionStore>() -> Router<ApiState<S>> {
    Router::new().route("/quizzes", post(post_quizzes::<S>))
}

/// Next random question for a quiz session
async fn post_quizzes<S: QuestionStore>(
    State(state): State<ApiState<S>>,
    Json(body): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    // Entropy-seeded rather than thread-local: the RNG has to cross the
    // store awaits inside a Send future.
    let mut rng = StdRng::from_entropy();

    let scope = body.quiz_category.map(|c| c.id);
    let question = service::next_question(
        &state.store,
        &mut rng,
        scope,
        &body.previous_questions,
    )
    .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
