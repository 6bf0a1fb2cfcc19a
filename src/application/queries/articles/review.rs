use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, PaginatedResult, ReviewCommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::Actor,
        article::{
            ArticleId, ArticleListFilter, ArticleOrder, ArticleStatus, PageRequest,
            specifications::CanReadReviewCommentsSpec,
        },
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewQueueQuery {
    pub page: PageRequest,
}

#[derive(Debug, Clone, Copy)]
pub struct ListReviewCommentsQuery {
    pub article_id: Uuid,
}

impl ArticleQueryService {
    /// Articles awaiting an editor, oldest submission first.
    pub async fn review_queue(
        &self,
        actor: &Actor,
        query: ReviewQueueQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleSummaryDto>> {
        if !actor.has_capability("articles", "read:queue") {
            return Err(ApplicationError::forbidden(
                "missing capability articles:read:queue",
            ));
        }

        let filter = ArticleListFilter {
            statuses: vec![ArticleStatus::Submitted, ArticleStatus::InReview],
            ..ArticleListFilter::default()
        };
        let (views, total) = self
            .read_repo
            .list(&filter, ArticleOrder::SubmittedAsc, query.page)
            .await?;

        Ok(PaginatedResult::new(
            views.into_iter().map(Into::into).collect(),
            query.page.page(),
            query.page.page_size(),
            total,
        ))
    }

    pub async fn list_review_comments(
        &self,
        actor: &Actor,
        query: ListReviewCommentsQuery,
    ) -> ApplicationResult<Vec<ReviewCommentDto>> {
        let id = ArticleId::from_uuid(query.article_id);
        let view = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|view| CanReadReviewCommentsSpec::new(actor, &view.article).is_satisfied())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let comments = self.read_repo.list_review_comments(view.article.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
