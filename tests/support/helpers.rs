// tests/support/helpers.rs
use super::builders::seed_sections;
use super::mocks::{DummyTokenManager, MockClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use newsdesk_core::application::services::{
    ApplicationServices, Repositories, WorkflowSettings,
};
use newsdesk_core::domain::article::ArticleStore;
use newsdesk_core::infrastructure::{
    repositories::InMemoryStore, util::DefaultSlugGenerator,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// インメモリストアと固定時計で組み立てたアプリケーション
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: InMemoryStore,
    pub clock: MockClock,
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryStore::with_sections(seed_sections());
        Self::with_article_store(store.clone(), Arc::new(store))
    }

    /// 記事の書き込みだけを差し替える。読み取りとセクションは `store` を使う。
    pub fn with_article_store(store: InMemoryStore, article_store: Arc<dyn ArticleStore>) -> Self {
        let clock = MockClock::default();
        let services = Arc::new(ApplicationServices::new(
            Repositories {
                article_store,
                article_reads: Arc::new(store.clone()),
                sections: Arc::new(store.clone()),
            },
            Arc::new(DummyTokenManager),
            Arc::new(clock.clone()),
            Arc::new(DefaultSlugGenerator),
            WorkflowSettings::default(),
        ));
        Self {
            services,
            store,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &[],
        )
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
