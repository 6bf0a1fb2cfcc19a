// src/presentation/http/controllers/sections.rs
use crate::application::{
    commands::sections::{CreateSectionCommand, UpdateSectionCommand},
    dto::SectionDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSectionRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSectionRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/sections",
    responses(
        (status = 200, description = "Active sections in display order.", body = [SectionDto])
    ),
    security(()),
    tag = "Sections"
)]
pub async fn list_sections(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SectionDto>>> {
    state
        .services
        .section_queries
        .list_active()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/sections",
    request_body = CreateSectionRequest,
    responses(
        (status = 201, description = "Section created.", body = SectionDto),
        (status = 400, description = "Invalid name or slug.", body = ErrorResponse),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn create_section(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateSectionRequest>,
) -> HttpResult<(StatusCode, Json<SectionDto>)> {
    let command = CreateSectionCommand {
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        sort_order: payload.sort_order,
        is_active: payload.is_active,
    };

    let section = state
        .services
        .section_commands
        .create_section(&actor, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(section)))
}

#[utoipa::path(
    put,
    path = "/api/v1/sections/{id}",
    params(("id" = Uuid, Path, description = "Section id")),
    request_body = UpdateSectionRequest,
    responses(
        (status = 200, description = "Section updated.", body = SectionDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 404, description = "Section not found.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Sections"
)]
pub async fn update_section(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSectionRequest>,
) -> HttpResult<Json<SectionDto>> {
    let command = UpdateSectionCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        description: payload.description,
        sort_order: payload.sort_order,
        is_active: payload.is_active,
    };

    state
        .services
        .section_commands
        .update_section(&actor, command)
        .await
        .into_http()
        .map(Json)
}
