mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn root_lists_services() -> Result<()> {
    let app = common::app();
    let (status, body) = common::get(&app, "/", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["data"]["endpoints"]["coffee"].is_string());
    Ok(())
}

#[tokio::test]
async fn health_reports_unreachable_database() -> Result<()> {
    let app = common::app();
    let (status, body) = common::get(&app, "/health", None).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 503);
    assert_eq!(body["data"]["status"], "degraded");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_404() -> Result<()> {
    let app = common::app();
    let (status, body) = common::get(&app, "/nope", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
    Ok(())
}

#[tokio::test]
async fn wrong_verb_is_json_405() -> Result<()> {
    let app = common::app();
    let (status, body) = common::send(&app, axum::http::Method::PUT, "/categories", None, None).await?;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], 405);
    assert_eq!(body["message"], "method not allowed");
    Ok(())
}
