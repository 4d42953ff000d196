use serde::{Deserialize, Serialize};
use trv_db::models::Question;

/// Body of `POST /quizzes`. The caller owns the session: it sends every
/// already-served question id on each call and appends the returned id
/// itself. Nothing is stored server-side between calls.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    /// Absent, or `{"id": 0}`, means all categories.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category scope as the play view sends it; extra fields (the label the UI
/// carries around) are ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

/// `question` is `null` once the session has exhausted the eligible pool.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
