mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use serde::Serialize;

use super::error::ApiError;
use crate::db::Question;

pub type ApiResponse<T> = Result<T, ApiError>;

/// Label reported as `currentCategory` by listings that are not scoped to one category.
pub const PLACEHOLDER_CATEGORY: &str = "History";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl QuestionList {
    fn new(questions: Vec<Question>, current_category: impl Into<String>) -> Self {
        QuestionList {
            total_questions: questions.len(),
            questions,
            current_category: current_category.into(),
        }
    }
}
