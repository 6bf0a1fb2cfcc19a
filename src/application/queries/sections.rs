use std::sync::Arc;

use crate::{
    application::{dto::SectionDto, error::ApplicationResult},
    domain::section::SectionRepository,
};

pub struct SectionQueryService {
    repo: Arc<dyn SectionRepository>,
}

impl SectionQueryService {
    pub fn new(repo: Arc<dyn SectionRepository>) -> Self {
        Self { repo }
    }

    /// Active sections in display order.
    pub async fn list_active(&self) -> ApplicationResult<Vec<SectionDto>> {
        let sections = self.repo.list_active().await?;
        Ok(sections.into_iter().map(Into::into).collect())
    }
}
