//! In-memory question store.
//!
//! Backs the integration test suite and doubles as a throwaway demo backend.
//! All maps are keyed by id, which makes the ascending-id ordering of the
//! listing queries fall out of `BTreeMap` iteration.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::models::{Category, NewQuestion, Question};
use crate::store::{QuestionStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

/// Shared, thread-safe in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a category. Categories have no authoring endpoint, so tests and
    /// demos install them directly.
    pub fn put_category(&self, id: i64, label: &str) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.categories.insert(
            id,
            Category {
                id,
                label: label.to_string(),
            },
        );
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        f(&self.inner.read().expect("store lock poisoned"))
    }
}

impl QuestionStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read(|inner| inner.questions.values().cloned().collect()))
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        Ok(self.read(|inner| {
            inner
                .questions
                .values()
                .filter(|q| q.category == category_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self.read(|inner| {
            inner
                .questions
                .values()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }))
    }

    async fn find_excluding(
        &self,
        excluded: &[i64],
        category_id: Option<i64>,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.read(|inner| {
            inner
                .questions
                .values()
                .filter(|q| !excluded.contains(&q.id))
                .filter(|q| category_id.is_none_or(|c| q.category == c))
                .cloned()
                .collect()
        }))
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.read(|inner| inner.categories.get(&category_id).cloned()))
    }

    async fn list_categories(&self) -> Result<BTreeMap<i64, String>, StoreError> {
        Ok(self.read(|inner| {
            inner
                .categories
                .values()
                .map(|c| (c.id, c.label.clone()))
                .collect()
        }))
    }

    async fn insert(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete(&self, question_id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        Ok(inner.questions.remove(&question_id).is_some())
    }
}
