// src/presentation/http/controllers/review.rs
//! Editor review desk.
use super::PageParams;
use crate::application::{
    commands::articles::{ApproveArticleCommand, PublishArticleCommand, RequestChangesCommand},
    dto::{ArticleDetailDto, ArticleSummaryDto, PaginatedResult},
    queries::articles::ReviewQueueQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestChangesRequest {
    pub comment: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/review/queue",
    params(PageParams),
    responses(
        (status = 200, description = "Articles awaiting review, oldest submission first.", body = PaginatedResult<ArticleSummaryDto>),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn review_queue(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .review_queue(
            &actor,
            ReviewQueueQuery {
                page: params.to_request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/review/articles/{id}/request-changes",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = RequestChangesRequest,
    responses(
        (status = 200, description = "Changes requested.", body = ArticleDetailDto),
        (status = 400, description = "Comment missing.", body = ErrorResponse),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Article is not under review.", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn request_changes(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<RequestChangesRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let comment = payload
        .comment
        .filter(|comment| !comment.trim().is_empty())
        .ok_or_else(|| HttpError::bad_request("a comment is required when requesting changes"))?;

    state
        .services
        .article_commands
        .request_changes(
            &actor,
            RequestChangesCommand {
                id,
                comment: Some(comment),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/review/articles/{id}/approve",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article approved.", body = ArticleDetailDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Article is not under review.", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .approve_article(&actor, ApproveArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/review/articles/{id}/publish",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published and assigned an issue date.", body = ArticleDetailDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Article is not approved.", body = ErrorResponse),
        (status = 503, description = "Concurrent update, retry later.", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .publish_article(&actor, PublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}
