// src/application/queries/articles/public.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleSummaryDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListFilter, ArticleOrder, ArticleSlug, ArticleStatus, PageRequest},
        section::SectionSlug,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeFeedQuery {
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct SectionFeedQuery {
    pub section_slug: String,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct GetPublishedArticleQuery {
    pub slug: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveQuery {
    pub page: PageRequest,
}

impl ArticleQueryService {
    fn published_filter() -> ArticleListFilter {
        ArticleListFilter {
            statuses: vec![ArticleStatus::Published],
            ..ArticleListFilter::default()
        }
    }

    async fn page_of(
        &self,
        filter: ArticleListFilter,
        order: ArticleOrder,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let (views, total) = self.read_repo.list(&filter, order, page).await?;
        Ok(PaginatedResult::new(
            views.into_iter().map(Into::into).collect(),
            page.page(),
            page.page_size(),
            total,
        ))
    }

    /// Articles published within the recent window, latest issue first.
    pub async fn home_feed(
        &self,
        query: HomeFeedQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let filter = ArticleListFilter {
            published_since: Some(self.clock.now() - self.recent_window),
            ..Self::published_filter()
        };
        self.page_of(filter, ArticleOrder::IssueDateDesc, query.page)
            .await
    }

    pub async fn section_feed(
        &self,
        query: SectionFeedQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let not_found =
            || ApplicationError::not_found(format!("section '{}' not found", query.section_slug));
        let slug = SectionSlug::new(query.section_slug.clone()).map_err(|_| not_found())?;
        let section = self
            .section_repo
            .find_by_slug(&slug)
            .await?
            .filter(|section| section.is_active)
            .ok_or_else(not_found)?;

        let filter = ArticleListFilter {
            section_id: Some(section.id),
            published_since: Some(self.clock.now() - self.recent_window),
            ..Self::published_filter()
        };
        self.page_of(filter, ArticleOrder::IssueDateDesc, query.page)
            .await
    }

    pub async fn published_article(
        &self,
        query: GetPublishedArticleQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let view = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(view.into())
    }

    /// Articles published before the recent window, newest first.
    pub async fn archive(
        &self,
        query: ArchiveQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let filter = ArticleListFilter {
            published_before: Some(self.clock.now() - self.recent_window),
            ..Self::published_filter()
        };
        self.page_of(filter, ArticleOrder::PublishedDesc, query.page)
            .await
    }
}
