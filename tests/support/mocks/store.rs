// tests/support/mocks/store.rs
use async_trait::async_trait;
use chrono::NaiveDate;
use newsdesk_core::domain::article::{
    Article, ArticleId, ArticleSlug, ArticleStore, ArticleTransaction, ArticleVersion,
    ReviewComment,
};
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::section::{Section, SectionId};
use newsdesk_core::infrastructure::repositories::InMemoryStore;
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

/// 指定回数だけ書き込みを競合として失敗させるストア
#[derive(Clone)]
pub struct ConflictingStore {
    inner: InMemoryStore,
    remaining: Arc<AtomicU32>,
    attempts: Arc<AtomicU32>,
}

impl ConflictingStore {
    pub fn new(inner: InMemoryStore, conflicts: u32) -> Self {
        Self {
            inner,
            remaining: Arc::new(AtomicU32::new(conflicts)),
            attempts: Arc::new(AtomicU32::new(0)),
        }
    }

    /// 書き込みを試みた回数
    pub fn write_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn check(&self) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let injected = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            Err(DomainError::Conflict("injected write conflict".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleStore for ConflictingStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let inner = self.inner.begin().await?;
        Ok(Box::new(ConflictingTransaction {
            inner,
            store: self.clone(),
        }))
    }
}

struct ConflictingTransaction {
    inner: Box<dyn ArticleTransaction>,
    store: ConflictingStore,
}

#[async_trait]
impl ArticleTransaction for ConflictingTransaction {
    async fn find_article_for_update(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.inner.find_article_for_update(id).await
    }

    async fn find_section(&mut self, id: SectionId) -> DomainResult<Option<Section>> {
        self.inner.find_section(id).await
    }

    async fn slug_taken(
        &mut self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        self.inner.slug_taken(slug, exclude).await
    }

    async fn count_issued_on(&mut self, issue_date: NaiveDate) -> DomainResult<u64> {
        self.inner.count_issued_on(issue_date).await
    }

    async fn insert_article(&mut self, article: &Article) -> DomainResult<()> {
        self.store.check()?;
        self.inner.insert_article(article).await
    }

    async fn update_article(
        &mut self,
        article: &Article,
        expected: ArticleVersion,
    ) -> DomainResult<()> {
        self.store.check()?;
        self.inner.update_article(article, expected).await
    }

    async fn insert_review_comment(&mut self, comment: &ReviewComment) -> DomainResult<()> {
        self.inner.insert_review_comment(comment).await
    }

    async fn commit(&mut self) -> DomainResult<()> {
        self.inner.commit().await
    }
}
