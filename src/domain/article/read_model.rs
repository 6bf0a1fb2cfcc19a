// src/domain/article/read_model.rs
use crate::domain::actor::ActorId;
use crate::domain::article::entity::Article;
use crate::domain::article::status::ArticleStatus;
use crate::domain::section::{Section, SectionId, SectionName, SectionSlug};
use chrono::{DateTime, Utc};

/// Section fields shown next to an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRef {
    pub id: SectionId,
    pub name: SectionName,
    pub slug: SectionSlug,
}

impl From<&Section> for SectionRef {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id,
            name: section.name.clone(),
            slug: section.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
    pub section: SectionRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrder {
    #[default]
    CreatedDesc,
    /// Issue date descending, then publication time descending.
    IssueDateDesc,
    PublishedDesc,
    /// Oldest submission first.
    SubmittedAsc,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub author_id: Option<ActorId>,
    pub section_id: Option<SectionId>,
    pub statuses: Vec<ArticleStatus>,
    pub published_since: Option<DateTime<Utc>>,
    pub published_before: Option<DateTime<Utc>>,
}

impl ArticleListFilter {
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(author) = &self.author_id {
            if &article.author_id != author {
                return false;
            }
        }
        if let Some(section) = self.section_id {
            if article.section_id != section {
                return false;
            }
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&article.status) {
            return false;
        }
        if let Some(since) = self.published_since {
            if !article.published_at.is_some_and(|at| at >= since) {
                return false;
            }
        }
        if let Some(before) = self.published_before {
            if !article.published_at.is_some_and(|at| at < before) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Page numbers start at 1; an out-of-range page size falls back to the default.
    pub const fn new(page: u32, page_size: u32) -> Self {
        let page = if page < 1 { 1 } else { page };
        let page_size = if page_size < 1 || page_size > Self::MAX_PAGE_SIZE {
            Self::DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page, page_size }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_normalizes_inputs() {
        let page = PageRequest::new(0, 0);
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 10);

        let page = PageRequest::new(3, 500);
        assert_eq!(page.page_size(), 10);
        assert_eq!(page.offset(), 20);

        let page = PageRequest::new(2, 100);
        assert_eq!(page.page_size(), 100);
        assert_eq!(page.offset(), 100);
    }
}
