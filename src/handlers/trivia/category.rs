// handlers/trivia/category.rs - /categories handlers

use axum::extract::{Path, State};
use serde_json::{json, Value};

use super::load_categories;
use crate::database::repository::{CategoryRepo, QuestionRepo};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Value> {
    let categories = load_categories(&state.pool).await?;
    if categories.is_empty() {
        return Err(ApiError::resource_not_found());
    }

    Ok(ApiResponse::success(json!({ "categories": categories })))
}

/// GET /categories/:id/questions
pub async fn questions_in_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::resource_not_found)?;

    let questions = QuestionRepo::by_category(&state.pool, category.id).await?;

    Ok(ApiResponse::success(json!({
        "questions": questions,
        "total_questions": questions.len(),
        "current_category": category.kind,
    })))
}
