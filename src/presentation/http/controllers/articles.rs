// src/presentation/http/controllers/articles.rs
//! Author-facing article endpoints.
use super::PageParams;
use crate::application::{
    commands::articles::{CreateArticleCommand, SubmitArticleCommand, UpdateArticleCommand},
    dto::{ArticleDetailDto, ArticleSummaryDto, PaginatedResult, ReviewCommentDto},
    queries::articles::{GetMyArticleQuery, ListMyArticlesQuery, ListReviewCommentsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub section_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
}

/// Omitted fields are left unchanged; a blank subtitle clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub section_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Draft created.", body = ArticleDetailDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 403, description = "Caller is not an author.", body = ErrorResponse),
        (status = 404, description = "Section not found or inactive.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDetailDto>)> {
    let command = CreateArticleCommand {
        section_id: payload.section_id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
    };

    let article = state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/mine",
    params(PageParams),
    responses(
        (status = 200, description = "The caller's articles, newest first.", body = PaginatedResult<ArticleSummaryDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_my_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_my_articles(
            &actor,
            ListMyArticlesQuery {
                page: params.to_request(),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/mine/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article detail.", body = ArticleDetailDto),
        (status = 404, description = "Not found or not owned by the caller.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_my_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_my_article(&actor, GetMyArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDetailDto),
        (status = 404, description = "Not found or not owned by the caller.", body = ErrorResponse),
        (status = 409, description = "Article is not editable in its current status.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        section_id: payload.section_id,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/submit",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article submitted for review.", body = ArticleDetailDto),
        (status = 404, description = "Not found or not owned by the caller.", body = ErrorResponse),
        (status = 409, description = "Article cannot be submitted from its current status.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_commands
        .submit_article(&actor, SubmitArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Review comments, newest first.", body = [ReviewCommentDto]),
        (status = 404, description = "Not found or not visible to the caller.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_review_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<Vec<ReviewCommentDto>>> {
    state
        .services
        .article_queries
        .list_review_comments(&actor, ListReviewCommentsQuery { article_id: id })
        .await
        .into_http()
        .map(Json)
}
