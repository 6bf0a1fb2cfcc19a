use super::{SectionCommandService, service::normalize_description};
use crate::{
    application::{
        dto::SectionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        section::{SectionId, SectionName, SectionUpdate},
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct UpdateSectionCommand {
    pub id: Uuid,
    pub name: Option<String>,
    pub slug: Option<String>,
    /// A blank description clears it.
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl SectionCommandService {
    pub async fn update_section(
        &self,
        actor: &Actor,
        command: UpdateSectionCommand,
    ) -> ApplicationResult<SectionDto> {
        Self::ensure_can_manage(actor)?;

        let id = SectionId::from_uuid(command.id);
        let mut section = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("section not found"))?;

        let name = command
            .name
            .filter(|n| !n.trim().is_empty())
            .map(SectionName::new)
            .transpose()?;
        let explicit_slug = command.slug.filter(|s| !s.trim().is_empty());

        // A new name or an explicit slug both regenerate the slug.
        let slug = match (&explicit_slug, &name) {
            (Some(source), _) => Some(self.claim_slug(source, Some(id)).await?),
            (None, Some(name)) => Some(self.claim_slug(name.as_str(), Some(id)).await?),
            (None, None) => None,
        };

        section.apply(
            SectionUpdate {
                name,
                slug,
                description: command.description.map(|d| normalize_description(Some(d))),
                sort_order: command.sort_order,
                is_active: command.is_active,
            },
            self.clock.now(),
        );
        self.repo.update(&section).await?;

        tracing::info!(section_id = %section.id, actor = %actor.id, "section updated");
        Ok(section.into())
    }
}
