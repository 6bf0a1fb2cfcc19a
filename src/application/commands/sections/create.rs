use super::{SectionCommandService, service::normalize_description};
use crate::{
    application::{dto::SectionDto, error::ApplicationResult},
    domain::{
        actor::Actor,
        section::{Section, SectionId, SectionName},
    },
};

#[derive(Debug, Clone)]
pub struct CreateSectionCommand {
    pub name: String,
    /// Explicit slug source; the name is used when absent or blank.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SectionCommandService {
    pub async fn create_section(
        &self,
        actor: &Actor,
        command: CreateSectionCommand,
    ) -> ApplicationResult<SectionDto> {
        Self::ensure_can_manage(actor)?;

        let name = SectionName::new(command.name)?;
        let source = command
            .slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| name.as_str());
        let slug = self.claim_slug(source, None).await?;

        let section = Section {
            id: SectionId::generate(),
            name,
            slug,
            description: normalize_description(command.description),
            sort_order: command.sort_order,
            is_active: command.is_active,
            created_at: self.clock.now(),
            updated_at: None,
        };
        self.repo.insert(&section).await?;

        tracing::info!(section_id = %section.id, slug = %section.slug, actor = %actor.id, "section created");
        Ok(section.into())
    }
}
