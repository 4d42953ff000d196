use crate::error::ApiError;

/// Difficulty is a bounded ordinal.
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Validate a question difficulty score.
pub fn validate_difficulty(difficulty: i32) -> Result<(), ApiError> {
    if !DIFFICULTY_RANGE.contains(&difficulty) {
        return Err(ApiError::Unprocessable(format!(
            "difficulty {difficulty} outside {}..={}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }
    Ok(())
}

/// Reject blank question/answer text.
pub fn validate_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Unprocessable(format!("{field} must not be blank")));
    }
    Ok(())
}
