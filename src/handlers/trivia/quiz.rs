// handlers/trivia/quiz.rs - POST /quizzes

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::repository::{CategoryRepo, QuestionRepo};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::LooseInt;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// `{type, id}` as sent by the quiz page; id 0 means every category
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub id: LooseInt,
}

impl QuizRequest {
    /// `Ok(None)` for "all categories"
    pub fn category_filter(&self) -> Result<Option<i32>, ApiError> {
        match self.quiz_category.id.value() {
            Some(0) => Ok(None),
            Some(id) => i32::try_from(id)
                .map(Some)
                .map_err(|_| ApiError::bad_request("quiz_category.id is out of range")),
            None => Err(ApiError::bad_request("quiz_category.id must be a number")),
        }
    }
}

/// POST /quizzes - next random question the player has not seen yet
pub async fn next_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let category = request.category_filter()?;

    if let Some(id) = category {
        CategoryRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(ApiError::resource_not_found)?;
    }

    let question =
        QuestionRepo::random_excluding(&state.pool, category, &request.previous_questions).await?;

    Ok(ApiResponse::success(json!({ "question": question })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: Value) -> QuizRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn zero_means_all_categories() {
        let req = request(json!({
            "previous_questions": [],
            "quiz_category": { "type": "click", "id": 0 }
        }));
        assert_eq!(req.category_filter().unwrap(), None);
    }

    #[test]
    fn string_category_ids_are_accepted() {
        let req = request(json!({
            "previous_questions": [5, 9],
            "quiz_category": { "type": "Science", "id": "1" }
        }));
        assert_eq!(req.category_filter().unwrap(), Some(1));
        assert_eq!(req.previous_questions, vec![5, 9]);
    }

    #[test]
    fn non_numeric_category_is_a_bad_request() {
        let req = request(json!({ "quiz_category": { "id": "science" } }));
        let err = req.category_filter().unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
