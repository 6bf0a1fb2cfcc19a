use crate::domain::section::Section;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Section> for SectionDto {
    fn from(section: Section) -> Self {
        Self {
            id: section.id.into(),
            name: section.name.into(),
            slug: section.slug.into(),
            description: section.description,
            sort_order: section.sort_order,
            is_active: section.is_active,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}
