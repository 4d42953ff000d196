//! PostgreSQL question store.

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::models::{Category, NewQuestion, Question};
use crate::store::{QuestionStore, StoreError};

/// Question store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionStore for PgStore {
    async fn list_all(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                WHERE category = $1
                ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_by_substring(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                WHERE question ILIKE '%' || $1 || '%'
                ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_excluding(
        &self,
        excluded: &[i64],
        category_id: Option<i64>,
    ) -> Result<Vec<Question>, StoreError> {
        let questions = match category_id {
            Some(category) => {
                sqlx::query_as(
                    // language=PostgreSQL
                    r#"
                        SELECT id, question, answer, category, difficulty
                        FROM questions
                        WHERE id <> ALL($1) AND category = $2
                    "#,
                )
                .bind(excluded)
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    // language=PostgreSQL
                    r#"
                        SELECT id, question, answer, category, difficulty
                        FROM questions
                        WHERE id <> ALL($1)
                    "#,
                )
                .bind(excluded)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(questions)
    }

    async fn get_category(&self, category_id: i64) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT id, label
                FROM categories
                WHERE id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn list_categories(&self) -> Result<BTreeMap<i64, String>, StoreError> {
        let categories: Vec<Category> = sqlx::query_as(
            // language=PostgreSQL
            r#"
                SELECT id, label
                FROM categories
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories.into_iter().map(|c| (c.id, c.label)).collect())
    }

    async fn insert(&self, question: NewQuestion) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar(
            // language=PostgreSQL
            r#"
                INSERT INTO questions (question, answer, category, difficulty)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete(&self, question_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            // language=PostgreSQL
            r#"
                DELETE FROM questions
                WHERE id = $1
            "#,
        )
        .bind(question_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
