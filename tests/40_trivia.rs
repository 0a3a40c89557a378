mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_question_reports_missing_fields() -> Result<()> {
    let app = common::app();
    let (status, body) = common::post(&app, "/questions", None, json!({ "question": "  " })).await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = body["field_errors"].as_object().expect("field errors");
    assert_eq!(fields.len(), 4);
    assert_eq!(fields["question"], "is required");
    assert_eq!(fields["difficulty"], "is required");
    Ok(())
}

#[tokio::test]
async fn difficulty_out_of_range_is_422() -> Result<()> {
    let app = common::app();
    let (status, body) = common::post(
        &app,
        "/questions",
        None,
        json!({
            "question": "What is the largest lake in Africa?",
            "answer": "Lake Victoria",
            "difficulty": "7",
            "category": "3"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field_errors"]["difficulty"], "must be between 1 and 5");
    Ok(())
}

#[tokio::test]
async fn malformed_quiz_body_is_400() -> Result<()> {
    let app = common::app();

    let (status, body) = common::post(&app, "/quizzes", None, json!({ "previous_questions": [] })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], 400);

    let (status, _) = common::post(
        &app,
        "/quizzes",
        None,
        json!({ "previous_questions": "none", "quiz_category": { "id": 0 } }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_numeric_quiz_category_is_400() -> Result<()> {
    let app = common::app();
    let (status, body) = common::post(
        &app,
        "/quizzes",
        None,
        json!({ "previous_questions": [], "quiz_category": { "type": "Science", "id": "science" } }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "quiz_category.id must be a number");
    Ok(())
}

#[tokio::test]
async fn non_integer_question_id_is_json_400() -> Result<()> {
    let app = common::app();
    let (status, body) = common::delete(&app, "/questions/abc", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    Ok(())
}

#[tokio::test]
async fn get_on_delete_only_route_is_405() -> Result<()> {
    let app = common::app();
    let (status, body) = common::get(&app, "/questions/1", None).await?;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], 405);
    Ok(())
}
