// src/domain/section/entity.rs
use crate::domain::section::value_objects::{SectionId, SectionName, SectionSlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub name: SectionName,
    pub slug: SectionSlug,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct SectionUpdate {
    pub name: Option<SectionName>,
    pub slug: Option<SectionSlug>,
    pub description: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Section {
    /// Articles may only be filed under active sections.
    pub const fn accepts_articles(&self) -> bool {
        self.is_active
    }

    pub fn apply(&mut self, update: SectionUpdate, now: DateTime<Utc>) {
        let SectionUpdate {
            name,
            slug,
            description,
            sort_order,
            is_active,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(sort_order) = sort_order {
            self.sort_order = sort_order;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = Some(now);
    }
}
