// src/presentation/http/controllers/public.rs
//! Anonymous reading surface. Only published articles are visible here.
use super::PageParams;
use crate::application::{
    dto::{ArticleDetailDto, ArticleSummaryDto, PaginatedResult},
    queries::articles::{ArchiveQuery, GetPublishedArticleQuery, HomeFeedQuery, SectionFeedQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};

#[utoipa::path(
    get,
    path = "/api/v1/public/home",
    params(PageParams),
    responses(
        (status = 200, description = "Recently published articles.", body = PaginatedResult<ArticleSummaryDto>)
    ),
    security(()),
    tag = "Public"
)]
pub async fn home_feed(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .home_feed(HomeFeedQuery {
            page: params.to_request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/public/sections/{slug}",
    params(("slug" = String, Path, description = "Section slug"), PageParams),
    responses(
        (status = 200, description = "Recently published articles of the section.", body = PaginatedResult<ArticleSummaryDto>),
        (status = 404, description = "Unknown or inactive section.", body = ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn section_feed(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .section_feed(SectionFeedQuery {
            section_slug: slug,
            page: params.to_request(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/public/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article.", body = ArticleDetailDto),
        (status = 404, description = "No published article with this slug.", body = ErrorResponse)
    ),
    security(()),
    tag = "Public"
)]
pub async fn published_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .published_article(GetPublishedArticleQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/public/archive",
    params(PageParams),
    responses(
        (status = 200, description = "Older published articles, newest first.", body = PaginatedResult<ArticleSummaryDto>)
    ),
    security(()),
    tag = "Public"
)]
pub async fn archive(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .archive(ArchiveQuery {
            page: params.to_request(),
        })
        .await
        .into_http()
        .map(Json)
}
