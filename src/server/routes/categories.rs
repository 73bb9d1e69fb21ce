use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Category,
    },
    server::{app::AppState, error::ApiError, extract::PathParam, serializers},
};

use super::{ApiResponse, QuestionList};

#[derive(Serialize)]
struct CategoriesMap {
    #[serde(serialize_with = "serializers::serialize_category_map")]
    categories: Vec<Category>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesMap>> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoriesMap { categories }))
}

async fn get_category_questions(
    State(pool): State<SqlitePool>,
    PathParam(id): PathParam<i64>,
) -> ApiResponse<Json<QuestionList>> {
    let questions = questions::get_questions_for_category(&pool, id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let Some(category) = categories::get_category(&pool, id).await? else {
        tracing::warn!(
            category = id,
            "{} questions reference a missing category",
            questions.len()
        );
        return Err(ApiError::NotFound);
    };
    Ok(Json(QuestionList::new(questions, category.kind)))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
