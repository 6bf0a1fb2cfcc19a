// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, public, review, sections},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Any origin is allowed when `allowed_origins` is empty.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .route("/api/v1/articles", post(articles::create_article))
        .route("/api/v1/articles/mine", get(articles::list_my_articles))
        .route("/api/v1/articles/mine/{id}", get(articles::get_my_article))
        .route("/api/v1/articles/{id}", put(articles::update_article))
        .route("/api/v1/articles/{id}/submit", post(articles::submit_article))
        .route(
            "/api/v1/articles/{id}/comments",
            get(articles::list_review_comments),
        )
        .route("/api/v1/review/queue", get(review::review_queue))
        .route(
            "/api/v1/review/articles/{id}/request-changes",
            post(review::request_changes),
        )
        .route(
            "/api/v1/review/articles/{id}/approve",
            post(review::approve_article),
        )
        .route(
            "/api/v1/review/articles/{id}/publish",
            post(review::publish_article),
        )
        .route("/api/v1/public/home", get(public::home_feed))
        .route("/api/v1/public/sections/{slug}", get(public::section_feed))
        .route(
            "/api/v1/public/articles/{slug}",
            get(public::published_article),
        )
        .route("/api/v1/public/archive", get(public::archive))
        .route(
            "/api/v1/sections",
            get(sections::list_sections).post(sections::create_section),
        )
        .route("/api/v1/sections/{id}", put(sections::update_section))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
