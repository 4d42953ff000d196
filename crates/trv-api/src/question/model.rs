use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trv_db::models::{NewQuestion, Question};

use crate::error::ApiError;

/// `?page=N` query parameter, defaulting to the first page.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

const fn default_page() -> usize {
    1
}

/// Body of `POST /questions`, a unified create-or-search entry point: a
/// present `searchTerm` makes it a search, otherwise the remaining fields
/// describe a new question.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPost {
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

impl QuestionPost {
    /// Interpret the body as a create request.
    pub fn into_new_question(self) -> Result<NewQuestion, ApiError> {
        let require = |field: &str, value: Option<String>| {
            value.ok_or_else(|| ApiError::Unprocessable(format!("{field} is required")))
        };

        Ok(NewQuestion {
            question: require("question", self.question)?,
            answer: require("answer", self.answer)?,
            category: self
                .category
                .ok_or_else(|| ApiError::Unprocessable("category is required".to_string()))?,
            difficulty: self
                .difficulty
                .ok_or_else(|| ApiError::Unprocessable("difficulty is required".to_string()))?,
        })
    }
}

/// One page of questions plus the context the list view renders: the
/// unpaginated total, the category map, and the active category label.
#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    pub current_category: String,
}

/// One page of search results. Unlike [`QuestionList`] there is no category
/// context; the search view keeps whatever was on screen.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub success: bool,
    pub id_question: i64,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i64,
}
