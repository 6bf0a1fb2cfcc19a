use crate::domain::errors::DomainResult;
use crate::domain::section::entity::Section;
use crate::domain::section::value_objects::{SectionId, SectionSlug};
use async_trait::async_trait;

#[async_trait]
pub trait SectionRepository: Send + Sync {
    /// Active sections ordered by sort order, then name.
    async fn list_active(&self) -> DomainResult<Vec<Section>>;
    async fn find_by_id(&self, id: SectionId) -> DomainResult<Option<Section>>;
    async fn find_by_slug(&self, slug: &SectionSlug) -> DomainResult<Option<Section>>;
    async fn insert(&self, section: &Section) -> DomainResult<()>;
    async fn update(&self, section: &Section) -> DomainResult<()>;
}
