use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::{
    deserialize_option_number_from_string, deserialize_string_from_number,
};
use serde_json::{Map, Value};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Category, NewQuestion, Question,
    },
    server::{
        app::AppState,
        deserializers::PageParam,
        error::ApiError,
        extract::{JsonBody, PathParam, QueryParams},
        pagination::paginate,
        serializers,
    },
    telemetry::{QUESTIONS_CREATED_CNTR, QUESTIONS_DELETED_CNTR},
};

use super::{ApiResponse, QuestionList, PLACEHOLDER_CATEGORY};

#[derive(Deserialize, Debug, PartialEq)]
struct SearchRequest {
    #[serde(rename = "searchTerm", deserialize_with = "deserialize_string_from_number")]
    search_term: String,
}

#[derive(Deserialize, Debug, PartialEq)]
struct CreateRequest {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
}

/// Body of `POST /questions`: a search when it carries `searchTerm`, a new question otherwise.
#[derive(Debug, PartialEq)]
enum QuestionsRequest {
    Search(SearchRequest),
    Create(CreateRequest),
}

impl<'de> Deserialize<'de> for QuestionsRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = Map::<String, Value>::deserialize(deserializer)?;
        let request = if body.contains_key("searchTerm") {
            SearchRequest::deserialize(Value::Object(body)).map(QuestionsRequest::Search)
        } else {
            CreateRequest::deserialize(Value::Object(body)).map(QuestionsRequest::Create)
        };
        request.map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsPage {
    questions: Vec<Question>,
    total_questions: usize,
    #[serde(serialize_with = "serializers::serialize_category_map")]
    categories: Vec<Category>,
    current_category: &'static str,
}

#[derive(Serialize)]
struct CreatedQuestion {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
    question_id: i64,
}

#[derive(Serialize)]
struct DeletedQuestion {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuestionsResponse {
    Found(QuestionList),
    Created(CreatedQuestion),
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    QueryParams(PageParam(page)): QueryParams<PageParam>,
) -> ApiResponse<Json<QuestionsPage>> {
    let all = questions::get_all_questions(&pool).await?;
    let total_questions = all.len();
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(QuestionsPage {
        questions: paginate(all, page),
        total_questions,
        categories,
        current_category: PLACEHOLDER_CATEGORY,
    }))
}

async fn search_or_create_question(
    State(pool): State<SqlitePool>,
    JsonBody(request): JsonBody<QuestionsRequest>,
) -> ApiResponse<Json<QuestionsResponse>> {
    let response = match request {
        QuestionsRequest::Search(SearchRequest { search_term }) => {
            let found = questions::search_questions(&pool, &search_term).await?;
            tracing::debug!(term = %search_term, matches = found.len(), "Searched questions");
            QuestionsResponse::Found(QuestionList::new(found, PLACEHOLDER_CATEGORY))
        }
        QuestionsRequest::Create(body) => {
            let new_question = NewQuestion {
                question: body.question,
                answer: body.answer,
                difficulty: body.difficulty,
                category: body.category,
            };
            let id = questions::create_question(&pool, &new_question).await?;
            QUESTIONS_CREATED_CNTR.inc();
            tracing::info!(id, "Created question");
            QuestionsResponse::Created(CreatedQuestion {
                question: new_question.question,
                answer: new_question.answer,
                difficulty: new_question.difficulty,
                category: new_question.category,
                question_id: id,
            })
        }
    };
    Ok(Json(response))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    PathParam(id): PathParam<i64>,
) -> ApiResponse<Json<DeletedQuestion>> {
    if questions::get_question_by_id(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    // a concurrent delete may have won since the lookup
    if questions::delete_question(&pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    QUESTIONS_DELETED_CNTR.inc();
    tracing::info!(id, "Deleted question");
    Ok(Json(DeletedQuestion {
        success: true,
        deleted: id,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(get_questions).post(search_or_create_question),
        )
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
