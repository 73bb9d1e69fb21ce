use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    server::{app::AppState, extract::JsonBody, serializers},
    telemetry::QUIZ_CNTR,
};

use super::ApiResponse;

/// Category id meaning "questions from every category".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize, Debug)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize, Debug)]
struct QuizRequest {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Serialize)]
struct QuizResponse {
    #[serde(serialize_with = "serializers::serialize_question_or_empty")]
    question: Option<Question>,
}

/// First candidate, in the given order, that was not served before.
fn first_unseen(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();
    candidates.into_iter().find(|q| !seen.contains(&q.id))
}

async fn next_question(
    State(pool): State<SqlitePool>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> ApiResponse<Json<QuizResponse>> {
    let category = request.quiz_category.id;
    let candidates = if category == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category).await?
    };
    let question = first_unseen(candidates, &request.previous_questions);
    match &question {
        Some(q) => {
            let label = category.to_string();
            QUIZ_CNTR.with_label_values(&[label.as_str()]).inc();
            tracing::debug!(category, question = q.id, "Serving quiz question");
        }
        None => tracing::info!(
            category,
            previous = request.previous_questions.len(),
            "Quiz has no questions left"
        ),
    }
    Ok(Json(QuizResponse { question }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
