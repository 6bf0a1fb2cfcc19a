// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_my_articles,
        crate::presentation::http::controllers::articles::get_my_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::submit_article,
        crate::presentation::http::controllers::articles::list_review_comments,
        crate::presentation::http::controllers::review::review_queue,
        crate::presentation::http::controllers::review::request_changes,
        crate::presentation::http::controllers::review::approve_article,
        crate::presentation::http::controllers::review::publish_article,
        crate::presentation::http::controllers::public::home_feed,
        crate::presentation::http::controllers::public::section_feed,
        crate::presentation::http::controllers::public::published_article,
        crate::presentation::http::controllers::public::archive,
        crate::presentation::http::controllers::sections::list_sections,
        crate::presentation::http::controllers::sections::create_section,
        crate::presentation::http::controllers::sections::update_section,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::review::RequestChangesRequest,
            crate::presentation::http::controllers::sections::CreateSectionRequest,
            crate::presentation::http::controllers::sections::UpdateSectionRequest,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ReviewCommentDto,
            crate::application::dto::SectionDto,
            crate::domain::article::ArticleStatus
        )
    ),
    tags(
        (name = "Articles", description = "Author article endpoints"),
        (name = "Review", description = "Editor review and publication endpoints"),
        (name = "Public", description = "Published articles for readers"),
        (name = "Sections", description = "Newspaper sections"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "Editorial workflow for a digital newspaper",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
