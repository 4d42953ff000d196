//! Category listing and category-scoped question listing.

use trv_db::store::QuestionStore;
use trv_quiz::QUESTIONS_PER_PAGE;

use crate::category::model::CategoryList;
use crate::error::ApiError;
use crate::question::model::QuestionList;

pub async fn list_categories<S: QuestionStore>(store: &S) -> Result<CategoryList, ApiError> {
    let categories = store.list_categories().await?;
    Ok(CategoryList { categories })
}

/// Questions restricted to one category, paginated.
///
/// An unresolved category id is a hard `NotFound`; a category that merely has
/// no questions yet is a successful empty page with a total of zero.
pub async fn list_by_category<S: QuestionStore>(
    store: &S,
    category_id: i64,
    page: usize,
) -> Result<QuestionList, ApiError> {
    let Some(category) = store.get_category(category_id).await? else {
        return Err(ApiError::NotFound(format!("unknown category {category_id}")));
    };

    let questions = store.find_by_category(category_id).await?;
    let page_items = trv_quiz::paginate(&questions, page, QUESTIONS_PER_PAGE);
    let categories = store.list_categories().await?;

    Ok(QuestionList {
        success: true,
        questions: page_items.to_vec(),
        total_questions: questions.len(),
        categories,
        current_category: category.label,
    })
}
