//! Stateless quiz selector.
//!
//! Each call gets the full input: the category scope and the ids already
//! served this session. The selector never remembers anything between calls,
//! so any instance with read access to the same store can serve any call.

use rand::Rng;
use trv_db::models::Question;
use trv_db::store::QuestionStore;

use crate::error::ApiError;

/// Sentinel category id the play view sends for the ALL tab.
pub const ALL_CATEGORIES: i64 = 0;

/// Draw one uniformly-random question outside `excluded`, or `None` once the
/// eligible pool is exhausted.
///
/// A scope that names a nonexistent category is rejected rather than treated
/// as an empty pool: the caller asked for something that isn't there, which
/// is different from having played through everything.
pub async fn next_question<S, R>(
    store: &S,
    rng: &mut R,
    scope: Option<i64>,
    excluded: &[i64],
) -> Result<Option<Question>, ApiError>
where
    S: QuestionStore,
    R: Rng + ?Sized,
{
    let scope = scope.filter(|&id| id != ALL_CATEGORIES);
    if let Some(category_id) = scope {
        if store.get_category(category_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("unknown category {category_id}")));
        }
    }

    let eligible = store.find_excluding(excluded, scope).await?;
    let picked = trv_quiz::pick_uniform(rng, &eligible).cloned();
    if picked.is_none() {
        tracing::debug!(?scope, excluded = excluded.len(), "quiz pool exhausted");
    }
    Ok(picked)
}
