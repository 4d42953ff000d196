use serde::{Deserialize, Serialize};

/// Trivia question as stored and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier, assigned by the store on insert
    pub id: i64,
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Category ID this question belongs to (indexed for fast lookups)
    pub category: i64,
    /// Difficulty score, 1 (easiest) to 5 (hardest)
    pub difficulty: i32,
}

/// Question category. Categories are seed data; there is no authoring path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i64,
    /// Display label, e.g. "Science"
    pub label: String,
}

/// Insert payload for a new question. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}
