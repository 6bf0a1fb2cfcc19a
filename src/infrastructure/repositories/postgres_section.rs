// src/infrastructure/repositories/postgres_section.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::section::{Section, SectionId, SectionName, SectionRepository, SectionSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const SECTION_COLUMNS: &str =
    "id, name, slug, description, sort_order, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(super) struct SectionRow {
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    sort_order: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<SectionRow> for Section {
    type Error = DomainError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SectionId::from_uuid(row.id),
            name: SectionName::new(row.name)?,
            slug: SectionSlug::new(row.slug)?,
            description: row.description,
            sort_order: row.sort_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresSectionRepository {
    pool: PgPool,
}

impl PostgresSectionRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SectionRepository for PostgresSectionRepository {
    async fn list_active(&self) -> DomainResult<Vec<Section>> {
        let sql = format!(
            "SELECT {SECTION_COLUMNS} FROM sections WHERE is_active ORDER BY sort_order, name"
        );
        let rows = sqlx::query_as::<_, SectionRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Section::try_from).collect()
    }

    async fn find_by_id(&self, id: SectionId) -> DomainResult<Option<Section>> {
        let sql = format!("SELECT {SECTION_COLUMNS} FROM sections WHERE id = $1");
        let row = sqlx::query_as::<_, SectionRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Section::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &SectionSlug) -> DomainResult<Option<Section>> {
        let sql = format!("SELECT {SECTION_COLUMNS} FROM sections WHERE slug = $1");
        let row = sqlx::query_as::<_, SectionRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Section::try_from).transpose()
    }

    async fn insert(&self, section: &Section) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO sections (id, name, slug, description, sort_order, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(section.id.as_uuid())
        .bind(section.name.as_str())
        .bind(section.slug.as_str())
        .bind(section.description.as_deref())
        .bind(section.sort_order)
        .bind(section.is_active)
        .bind(section.created_at)
        .bind(section.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn update(&self, section: &Section) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE sections
                SET name = $2, slug = $3, description = $4, sort_order = $5,
                    is_active = $6, updated_at = $7
              WHERE id = $1",
        )
        .bind(section.id.as_uuid())
        .bind(section.name.as_str())
        .bind(section.slug.as_str())
        .bind(section.description.as_deref())
        .bind(section.sort_order)
        .bind(section.is_active)
        .bind(section.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("section not found".into()));
        }
        Ok(())
    }
}
