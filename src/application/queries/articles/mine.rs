use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleSummaryDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{ArticleId, ArticleListFilter, ArticleOrder, PageRequest},
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListMyArticlesQuery {
    pub page: PageRequest,
}

#[derive(Debug, Clone, Copy)]
pub struct GetMyArticleQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    /// The actor's own articles, newest first.
    pub async fn list_my_articles(
        &self,
        actor: &Actor,
        query: ListMyArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        let filter = ArticleListFilter {
            author_id: Some(actor.id.clone()),
            ..ArticleListFilter::default()
        };
        let (views, total) = self
            .read_repo
            .list(&filter, ArticleOrder::CreatedDesc, query.page)
            .await?;

        Ok(PaginatedResult::new(
            views.into_iter().map(Into::into).collect(),
            query.page.page(),
            query.page.page_size(),
            total,
        ))
    }

    pub async fn get_my_article(
        &self,
        actor: &Actor,
        query: GetMyArticleQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let view = self
            .read_repo
            .find_by_id(ArticleId::from_uuid(query.id))
            .await?
            .filter(|view| actor.owns(&view.article.author_id))
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(view.into())
    }
}
