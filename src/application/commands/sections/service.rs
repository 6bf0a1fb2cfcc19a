use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::{
        actor::Actor,
        section::{SectionId, SectionRepository, SectionSlug},
    },
};

pub struct SectionCommandService {
    pub(super) repo: Arc<dyn SectionRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SectionCommandService {
    pub fn new(
        repo: Arc<dyn SectionRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slugger,
            clock,
        }
    }

    pub(super) fn ensure_can_manage(actor: &Actor) -> ApplicationResult<()> {
        if actor.has_capability("sections", "manage") {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "missing capability sections:manage",
            ))
        }
    }

    /// Section slugs are never suffixed; a taken slug is a conflict.
    pub(super) async fn claim_slug(
        &self,
        source: &str,
        owner: Option<SectionId>,
    ) -> ApplicationResult<SectionSlug> {
        let normalized = self.slugger.slugify(source);
        if normalized.is_empty() {
            return Err(ApplicationError::validation(
                "slug could not be generated from the given text",
            ));
        }
        let slug = SectionSlug::new(normalized)?;

        if let Some(existing) = self.repo.find_by_slug(&slug).await? {
            if Some(existing.id) != owner {
                return Err(ApplicationError::conflict(format!(
                    "section slug '{slug}' already exists"
                )));
            }
        }
        Ok(slug)
    }
}

pub(super) fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
