//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly and inspect the HTML error fragment.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use party_api::error::AppError;
use party_core::error::CoreError;
use uuid::Uuid;

async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = Uuid::nil();
    let err = AppError::Core(CoreError::NotFound { entity: "Gift", id });

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains(r#"data-code="NOT_FOUND""#));
    assert!(html.contains(&format!("Gift with id {id} not found")));
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation(
        "invitation: Invitation must be at least 10 characters".into(),
    ));

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains(r#"data-code="VALIDATION_ERROR""#));
    assert!(html.contains("Invitation must be at least 10 characters"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Invalid guest id: <nope>".into());

    let (status, html) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains(r#"data-code="BAD_REQUEST""#));
    assert!(html.contains("Invalid guest id: &lt;nope&gt;"));
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, html) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Resource not found"));
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let (status, html) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains(r#"data-code="INTERNAL_ERROR""#));
    assert!(html.contains("An internal error occurred"));
    assert!(!html.contains("pool timed out"));
}
