// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, postgres_section::SectionRow};
use crate::domain::actor::ActorId;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListFilter, ArticleOrder, ArticleReadRepository,
    ArticleSlug, ArticleStatus, ArticleStore, ArticleSubtitle, ArticleTitle, ArticleTransaction,
    ArticleVersion, ArticleView, PageRequest, ReviewComment, ReviewCommentId, ReviewCommentText,
    SectionRef,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::section::{Section, SectionId, SectionName, SectionSlug};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "a.id, a.section_id, a.author_id, a.title, a.subtitle, a.slug, \
     a.content, a.status, a.issue_date, a.submitted_at, a.published_at, a.archived_at, \
     a.created_at, a.updated_at";

const VIEW_COLUMNS: &str = "a.id, a.section_id, a.author_id, a.title, a.subtitle, a.slug, \
     a.content, a.status, a.issue_date, a.submitted_at, a.published_at, a.archived_at, \
     a.created_at, a.updated_at, s.name AS section_name, s.slug AS section_slug";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    section_id: Uuid,
    author_id: String,
    title: String,
    subtitle: Option<String>,
    slug: String,
    content: String,
    status: i16,
    issue_date: Option<NaiveDate>,
    submitted_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    archived_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::from_uuid(row.id),
            author_id: ActorId::new(row.author_id)?,
            section_id: SectionId::from_uuid(row.section_id),
            title: ArticleTitle::new(row.title)?,
            subtitle: ArticleSubtitle::parse(row.subtitle)?,
            content: ArticleContent::new(row.content)?,
            slug: ArticleSlug::new(row.slug)?,
            status: ArticleStatus::from_ordinal(row.status)?,
            issue_date: row.issue_date,
            submitted_at: row.submitted_at,
            published_at: row.published_at,
            archived_at: row.archived_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    section_name: String,
    section_slug: String,
}

impl TryFrom<ArticleViewRow> for ArticleView {
    type Error = DomainError;

    fn try_from(row: ArticleViewRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        let section = SectionRef {
            id: article.section_id,
            name: SectionName::new(row.section_name)?,
            slug: SectionSlug::new(row.section_slug)?,
        };
        Ok(Self { article, section })
    }
}

#[derive(Debug, FromRow)]
struct ReviewCommentRow {
    id: Uuid,
    article_id: Uuid,
    editor_id: String,
    comment: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewCommentRow> for ReviewComment {
    type Error = DomainError;

    fn try_from(row: ReviewCommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReviewCommentId::from_uuid(row.id),
            article_id: ArticleId::from_uuid(row.article_id),
            editor_id: ActorId::new(row.editor_id)?,
            comment: ReviewCommentText::new(row.comment)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresArticleStore {
    pool: PgPool,
}

impl PostgresArticleStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PostgresArticleStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresArticleTransaction { tx: Some(tx) }))
    }
}

/// Rolls back on drop unless committed.
pub struct PostgresArticleTransaction {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PostgresArticleTransaction {
    fn conn(&mut self) -> DomainResult<&mut PgConnection> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| DomainError::Persistence("transaction already finished".into()))
    }
}

#[async_trait]
impl ArticleTransaction for PostgresArticleTransaction {
    async fn find_article_for_update(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1 FOR UPDATE");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(self.conn()?)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_section(&mut self, id: SectionId) -> DomainResult<Option<Section>> {
        let row = sqlx::query_as::<_, SectionRow>(
            "SELECT id, name, slug, description, sort_order, is_active, created_at, updated_at
             FROM sections WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        row.map(Section::try_from).transpose()
    }

    async fn slug_taken(
        &mut self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                 SELECT 1 FROM articles WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(slug.as_str())
        .bind(exclude.map(|id| id.as_uuid()))
        .fetch_one(self.conn()?)
        .await
        .map_err(map_sqlx)
    }

    async fn count_issued_on(&mut self, issue_date: NaiveDate) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM articles WHERE published_at IS NOT NULL AND issue_date = $1",
        )
        .bind(issue_date)
        .fetch_one(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        u64::try_from(count).map_err(|err| DomainError::Persistence(err.to_string()))
    }

    async fn insert_article(&mut self, article: &Article) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO articles (id, section_id, author_id, title, subtitle, slug, content, status,
                                   issue_date, submitted_at, published_at, archived_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(article.id.as_uuid())
        .bind(article.section_id.as_uuid())
        .bind(article.author_id.as_str())
        .bind(article.title.as_str())
        .bind(article.subtitle.as_ref().map(ArticleSubtitle::as_str))
        .bind(article.slug.as_str())
        .bind(article.content.as_str())
        .bind(article.status.ordinal())
        .bind(article.issue_date)
        .bind(article.submitted_at)
        .bind(article.published_at)
        .bind(article.archived_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn update_article(
        &mut self,
        article: &Article,
        expected: ArticleVersion,
    ) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles
                SET section_id = $2, title = $3, subtitle = $4, slug = $5, content = $6,
                    status = $7, issue_date = $8, submitted_at = $9, published_at = $10,
                    archived_at = $11, updated_at = $12
              WHERE id = $1 AND status = $13 AND updated_at = $14",
        )
        .bind(article.id.as_uuid())
        .bind(article.section_id.as_uuid())
        .bind(article.title.as_str())
        .bind(article.subtitle.as_ref().map(ArticleSubtitle::as_str))
        .bind(article.slug.as_str())
        .bind(article.content.as_str())
        .bind(article.status.ordinal())
        .bind(article.issue_date)
        .bind(article.submitted_at)
        .bind(article.published_at)
        .bind(article.archived_at)
        .bind(article.updated_at)
        .bind(expected.status.ordinal())
        .bind(expected.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }
        Ok(())
    }

    async fn insert_review_comment(&mut self, comment: &ReviewComment) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO review_comments (id, article_id, editor_id, comment, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(comment.id.as_uuid())
        .bind(comment.article_id.as_uuid())
        .bind(comment.editor_id.as_str())
        .bind(comment.comment.as_str())
        .bind(comment.created_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| DomainError::Persistence("transaction already finished".into()))?;
        tx.commit().await.map_err(map_sqlx)
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleListFilter) {
        builder.push(" WHERE TRUE");

        if let Some(author) = &filter.author_id {
            builder.push(" AND a.author_id = ");
            builder.push_bind(author.as_str().to_owned());
        }
        if let Some(section) = filter.section_id {
            builder.push(" AND a.section_id = ");
            builder.push_bind(section.as_uuid());
        }
        if !filter.statuses.is_empty() {
            let ordinals: Vec<i16> = filter.statuses.iter().map(|s| s.ordinal()).collect();
            builder.push(" AND a.status = ANY(");
            builder.push_bind(ordinals);
            builder.push(")");
        }
        if let Some(since) = filter.published_since {
            builder.push(" AND a.published_at >= ");
            builder.push_bind(since);
        }
        if let Some(before) = filter.published_before {
            builder.push(" AND a.published_at < ");
            builder.push_bind(before);
        }
    }

    const fn order_clause(order: ArticleOrder) -> &'static str {
        match order {
            ArticleOrder::CreatedDesc => " ORDER BY a.created_at DESC, a.id DESC",
            ArticleOrder::IssueDateDesc => {
                " ORDER BY a.issue_date DESC NULLS LAST, a.published_at DESC NULLS LAST, a.id DESC"
            }
            ArticleOrder::PublishedDesc => " ORDER BY a.published_at DESC NULLS LAST, a.id DESC",
            ArticleOrder::SubmittedAsc => " ORDER BY a.submitted_at ASC NULLS LAST, a.id ASC",
        }
    }

    async fn fetch_view(
        &self,
        condition: &str,
        bind: impl ToString + Send,
    ) -> DomainResult<Option<ArticleView>> {
        let sql = format!(
            "SELECT {VIEW_COLUMNS} FROM articles a JOIN sections s ON s.id = a.section_id WHERE {condition}"
        );
        let row = sqlx::query_as::<_, ArticleViewRow>(&sql)
            .bind(bind.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleView::try_from).transpose()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        self.fetch_view("a.id = $1::uuid", id).await
    }

    async fn find_published_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleView>> {
        let condition = format!("a.slug = $1 AND a.status = {}", ArticleStatus::Published.ordinal());
        self.fetch_view(&condition, slug).await
    }

    async fn list(
        &self,
        filter: &ArticleListFilter,
        order: ArticleOrder,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleView>, u64)> {
        // Count and page share one snapshot so total_items matches items.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_filter(&mut count_builder, filter);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {VIEW_COLUMNS} FROM articles a JOIN sections s ON s.id = a.section_id"
        ));
        Self::apply_filter(&mut builder, filter);
        builder.push(Self::order_clause(order));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.page_size()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleViewRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        let views = rows
            .into_iter()
            .map(ArticleView::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total = u64::try_from(total).map_err(|err| DomainError::Persistence(err.to_string()))?;

        Ok((views, total))
    }

    async fn list_review_comments(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ReviewComment>> {
        let rows = sqlx::query_as::<_, ReviewCommentRow>(
            "SELECT id, article_id, editor_id, comment, created_at
             FROM review_comments WHERE article_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(article_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ReviewComment::try_from).collect()
    }
}
