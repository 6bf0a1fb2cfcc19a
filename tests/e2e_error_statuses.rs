// tests/e2e_error_statuses.rs
use axum::http::{Method, StatusCode};
use newsdesk_core::infrastructure::repositories::InMemoryStore;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

mod support;
use support::{
    AUTHOR_TOKEN, CULTURA_ID, ConflictingStore, EDITOR_TOKEN, EXPIRED_TOKEN, TestApp,
    assert_error_response, make_test_router, read_json, request, seed_sections,
};

fn article_body(title: &str) -> serde_json::Value {
    json!({ "section_id": CULTURA_ID, "title": title, "content": "Cuerpo" })
}

/// トークンがない、または期限切れの場合は 401
#[tokio::test]
async fn missing_or_expired_token_is_unauthorized() {
    let router = make_test_router().await;

    let resp = router
        .clone()
        .oneshot(request(Method::GET, "/api/v1/articles/mine", None, None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = router
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/v1/articles/mine",
            Some(EXPIRED_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = router
        .oneshot(request(
            Method::GET,
            "/api/v1/review/queue",
            Some("not-a-token"),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// 記者がレビュー系の操作を呼ぶと 403
#[tokio::test]
async fn author_on_review_route_is_forbidden() {
    let router = make_test_router().await;

    let resp = router
        .clone()
        .oneshot(request(Method::GET, "/api/v1/review/queue", Some(AUTHOR_TOKEN), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let resp = router
        .oneshot(request(
            Method::POST,
            &format!("/api/v1/review/articles/{}/publish", Uuid::new_v4()),
            Some(AUTHOR_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn unknown_resources_are_not_found() {
    let router = make_test_router().await;

    let resp = router
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/api/v1/articles/mine/{}", Uuid::new_v4()),
            Some(AUTHOR_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = router
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/v1/public/articles/no-existe",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = router
        .oneshot(request(
            Method::GET,
            "/api/v1/public/sections/suplemento",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 許可されていない状態遷移は 409
#[tokio::test]
async fn invalid_transition_is_a_conflict() {
    let router = make_test_router().await;

    let resp = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles",
            Some(AUTHOR_TOKEN),
            Some(article_body("Borrador")),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = read_json(resp).await["id"].as_str().unwrap().to_string();

    let resp = router
        .oneshot(request(
            Method::POST,
            &format!("/api/v1/review/articles/{id}/publish"),
            Some(EDITOR_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

/// スラグを作れないタイトルは 400
#[tokio::test]
async fn title_without_slug_characters_is_a_bad_request() {
    let router = make_test_router().await;
    let resp = router
        .oneshot(request(
            Method::POST,
            "/api/v1/articles",
            Some(AUTHOR_TOKEN),
            Some(article_body("¿¡!?")),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// HTTP からの差し戻しにはコメントが必須
#[tokio::test]
async fn request_changes_without_comment_is_a_bad_request() {
    let router = make_test_router().await;
    for body in [json!({}), json!({ "comment": "   " })] {
        let resp = router
            .clone()
            .oneshot(request(
                Method::POST,
                &format!("/api/v1/review/articles/{}/request-changes", Uuid::new_v4()),
                Some(EDITOR_TOKEN),
                Some(body),
            ))
            .await
            .unwrap();
        assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    }
}

/// 再試行しても書き込みが競合し続ける場合は 503
#[tokio::test]
async fn persistent_conflict_is_service_unavailable() {
    let store = InMemoryStore::with_sections(seed_sections());
    let conflicting = ConflictingStore::new(store.clone(), 2);
    let router = TestApp::with_article_store(store, Arc::new(conflicting)).router();

    let resp = router
        .oneshot(request(
            Method::POST,
            "/api/v1/articles",
            Some(AUTHOR_TOKEN),
            Some(article_body("Competida")),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").await;
}
