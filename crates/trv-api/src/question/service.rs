//! Listing, search, and authoring operations over the question store.
//!
//! Every function takes the store as an argument and holds no state of its
//! own; concurrent requests only share the store.

use trv_db::models::NewQuestion;
use trv_db::store::QuestionStore;
use trv_quiz::QUESTIONS_PER_PAGE;

use crate::error::ApiError;
use crate::question::model::{QuestionList, SearchResults};
use crate::validation;

/// All questions in ascending id order, one page at a time.
///
/// An empty page is a hard `NotFound`, even on an empty store. Search and
/// category listings return an empty page as success instead; the original
/// API behaves asymmetrically here and that behavior is kept.
pub async fn list_questions<S: QuestionStore>(
    store: &S,
    page: usize,
) -> Result<QuestionList, ApiError> {
    let questions = store.list_all().await?;
    let page_items = trv_quiz::paginate(&questions, page, QUESTIONS_PER_PAGE);
    if page_items.is_empty() {
        return Err(ApiError::NotFound(format!("no questions on page {page}")));
    }

    let categories = store.list_categories().await?;
    Ok(QuestionList {
        success: true,
        questions: page_items.to_vec(),
        total_questions: questions.len(),
        categories,
        current_category: "ALL".to_string(),
    })
}

/// Case-insensitive substring search over question text.
///
/// The page and the total are computed from the same matched set, so the
/// count stays consistent with what pagination slices.
pub async fn search_questions<S: QuestionStore>(
    store: &S,
    term: &str,
    page: usize,
) -> Result<SearchResults, ApiError> {
    let matches = store.find_by_substring(term).await?;
    let page_items = trv_quiz::paginate(&matches, page, QUESTIONS_PER_PAGE);
    Ok(SearchResults {
        success: true,
        questions: page_items.to_vec(),
        total_questions: matches.len(),
    })
}

/// Insert a new question after validating its shape and category.
pub async fn create_question<S: QuestionStore>(
    store: &S,
    new: NewQuestion,
) -> Result<i64, ApiError> {
    validation::validate_text("question", &new.question)?;
    validation::validate_text("answer", &new.answer)?;
    validation::validate_difficulty(new.difficulty)?;

    if store.get_category(new.category).await?.is_none() {
        return Err(ApiError::Unprocessable(format!(
            "unknown category {}",
            new.category
        )));
    }

    let id = store.insert(new).await?;
    tracing::info!(question_id = id, "question created");
    Ok(id)
}

/// Delete a question by id. Deleting an unknown id is a caller error.
pub async fn delete_question<S: QuestionStore>(store: &S, id: i64) -> Result<i64, ApiError> {
    if !store.delete(id).await? {
        return Err(ApiError::Unprocessable(format!("unknown question {id}")));
    }
    tracing::info!(question_id = id, "question deleted");
    Ok(id)
}
