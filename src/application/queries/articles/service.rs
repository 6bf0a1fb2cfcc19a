use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::ports::time::Clock,
    domain::{article::ArticleReadRepository, section::SectionRepository},
};

/// Read side of the article workflow: author listings, the editor review
/// queue and the public reading surface.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) section_repo: Arc<dyn SectionRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) recent_window: Duration,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        section_repo: Arc<dyn SectionRepository>,
        clock: Arc<dyn Clock>,
        recent_window: Duration,
    ) -> Self {
        Self {
            read_repo,
            section_repo,
            clock,
            recent_window,
        }
    }
}
