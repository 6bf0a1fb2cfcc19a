use crate::domain::article::comment::ReviewComment;
use crate::domain::article::entity::{Article, ArticleVersion};
use crate::domain::article::read_model::{ArticleListFilter, ArticleOrder, ArticleView, PageRequest};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::section::{Section, SectionId};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Opens one unit of work per workflow operation.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>>;
}

/// Reads and writes that commit or roll back together. Dropping the
/// transaction without calling [`ArticleTransaction::commit`] discards every
/// write made through it.
#[async_trait]
pub trait ArticleTransaction: Send {
    /// Loads the article and holds it against concurrent writers until the
    /// transaction ends.
    async fn find_article_for_update(&mut self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_section(&mut self, id: SectionId) -> DomainResult<Option<Section>>;
    /// Whether an article other than `exclude` already uses `slug`.
    async fn slug_taken(
        &mut self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool>;
    /// Published articles already assigned to `issue_date`.
    async fn count_issued_on(&mut self, issue_date: NaiveDate) -> DomainResult<u64>;
    async fn insert_article(&mut self, article: &Article) -> DomainResult<()>;
    /// Fails with a conflict when the stored row no longer matches `expected`.
    async fn update_article(
        &mut self,
        article: &Article,
        expected: ArticleVersion,
    ) -> DomainResult<()>;
    async fn insert_review_comment(&mut self, comment: &ReviewComment) -> DomainResult<()>;
    async fn commit(&mut self) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>>;
    async fn find_published_by_slug(&self, slug: &ArticleSlug)
    -> DomainResult<Option<ArticleView>>;
    /// Returns the requested page and the total number of matching articles.
    async fn list(
        &self,
        filter: &ArticleListFilter,
        order: ArticleOrder,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleView>, u64)>;
    /// Newest first.
    async fn list_review_comments(&self, article_id: ArticleId)
    -> DomainResult<Vec<ReviewComment>>;
}
