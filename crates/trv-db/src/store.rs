//! Abstract question store contract.
//!
//! Every listing, authoring, and quiz operation consumes this trait instead
//! of a concrete backend, so the same engine runs against PostgreSQL in
//! production ([`PgStore`](crate::postgres::PgStore)) and against an
//! in-memory map in tests ([`MemoryStore`](crate::memory::MemoryStore)).

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;

use crate::models::{Category, NewQuestion, Question};

/// Backend failure surfaced by a store operation.
///
/// Failures are deterministic for a given store state; callers propagate them
/// without retrying.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for questions and categories.
///
/// Ordered queries return rows in ascending id order so pagination is
/// deterministic. `find_excluding` carries no ordering contract; it only
/// feeds the random quiz selector.
pub trait QuestionStore: Clone + Send + Sync + 'static {
    /// All questions, ascending id.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Question>, StoreError>> + Send;

    /// Questions in one category, ascending id.
    fn find_by_category(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Vec<Question>, StoreError>> + Send;

    /// Questions whose text contains `term`, case-insensitively, ascending
    /// id. An empty term matches every question.
    fn find_by_substring(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<Question>, StoreError>> + Send;

    /// Questions not in `excluded`, optionally restricted to one category.
    fn find_excluding(
        &self,
        excluded: &[i64],
        category_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Question>, StoreError>> + Send;

    /// Look up a single category.
    fn get_category(
        &self,
        category_id: i64,
    ) -> impl Future<Output = Result<Option<Category>, StoreError>> + Send;

    /// Full id -> label mapping, ascending id.
    fn list_categories(
        &self,
    ) -> impl Future<Output = Result<BTreeMap<i64, String>, StoreError>> + Send;

    /// Insert a question and return its assigned id.
    fn insert(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = Result<i64, StoreError>> + Send;

    /// Delete a question. Returns `false` when the id does not exist.
    fn delete(&self, question_id: i64) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
