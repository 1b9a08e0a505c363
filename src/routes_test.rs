use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_editor() {
    let response = redirect_root_to_editor().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some(EDITOR_PATH));
}
