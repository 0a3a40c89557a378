// handlers/trivia/question.rs - /questions handlers

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::load_categories;
use crate::database::models::question::QuestionInput;
use crate::database::repository::{CategoryRepo, QuestionRepo};
use crate::error::{ApiError, FieldErrors};
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::pagination::{Page, PageQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Value> {
    let page = Page::new(query.page(), state.config.api.page_size);

    let questions = QuestionRepo::page(&state.pool, page.limit, page.offset).await?;
    if questions.is_empty() {
        return Err(ApiError::resource_not_found());
    }

    let total_questions = QuestionRepo::count(&state.pool).await?;
    let categories = load_categories(&state.pool).await?;

    Ok(ApiResponse::success(json!({
        "questions": questions,
        "total_questions": total_questions,
        "categories": categories,
        "current_category": null,
    })))
}

/// POST /questions - searches when the body carries `searchTerm`, creates otherwise
pub async fn create_or_search(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Value> {
    if body.get("searchTerm").is_some() {
        let search: SearchBody =
            serde_json::from_value(body).map_err(|e| ApiError::unprocessable(e.to_string()))?;
        return search_by_term(&state, &search.search_term).await;
    }

    let input: QuestionInput =
        serde_json::from_value(body).map_err(|e| ApiError::unprocessable(e.to_string()))?;
    let new_question = input.validate()?;

    if CategoryRepo::find_by_id(&state.pool, new_question.category)
        .await?
        .is_none()
    {
        let mut errors = FieldErrors::new();
        errors.insert("category".into(), "unknown category".into());
        return Err(ApiError::validation(errors));
    }

    let question = QuestionRepo::create(&state.pool, &new_question).await?;
    let total_questions = QuestionRepo::count(&state.pool).await?;
    info!(question_id = question.id, category = question.category, "Question created");

    Ok(ApiResponse::success(json!({
        "created": question.id,
        "total_questions": total_questions,
    })))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> ApiResult<Value> {
    search_by_term(&state, &body.search_term).await
}

async fn search_by_term(state: &AppState, term: &str) -> ApiResult<Value> {
    let questions = QuestionRepo::search(&state.pool, term).await?;

    Ok(ApiResponse::success(json!({
        "questions": questions,
        "total_questions": questions.len(),
        "current_category": null,
    })))
}

/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(ApiError::resource_not_found());
    }
    let total_questions = QuestionRepo::count(&state.pool).await?;
    info!(question_id = id, "Question deleted");

    Ok(ApiResponse::success(json!({
        "deleted": id,
        "total_questions": total_questions,
    })))
}
