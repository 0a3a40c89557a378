use axum::{
    body::to_bytes,
    http::{
        header::{ALLOW, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

const MAX_REJECTION_BODY: usize = 16 * 1024;

/// Router fallback for paths no service owns
pub async fn not_found() -> ApiError {
    ApiError::resource_not_found()
}

/// Give framework-generated errors (wrong verb, extractor rejections) the JSON envelope.
/// Responses already carrying JSON pass through untouched.
pub async fn json_error_fallback(response: Response) -> Response {
    let status = response.status();
    let handled = matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::NOT_FOUND
            | StatusCode::METHOD_NOT_ALLOWED
            | StatusCode::UNPROCESSABLE_ENTITY
            | StatusCode::INTERNAL_SERVER_ERROR
    );
    if !handled || is_json(&response) {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let detail = to_bytes(response.into_body(), MAX_REJECTION_BODY)
        .await
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .filter(|text| !text.is_empty());

    let error = match status {
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        StatusCode::NOT_FOUND => ApiError::not_found(detail.unwrap_or_else(|| "resource not found".into())),
        StatusCode::BAD_REQUEST => ApiError::bad_request(detail.unwrap_or_else(|| "bad request".into())),
        StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::unprocessable(detail.unwrap_or_else(|| "unprocessable".into()))
        }
        _ => ApiError::internal_server_error("internal server error"),
    };

    let mut rewritten = error.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}
