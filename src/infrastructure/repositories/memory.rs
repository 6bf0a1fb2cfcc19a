// src/infrastructure/repositories/memory.rs
//! Process-local store used for development runs and tests.
//!
//! A transaction holds the store lock from `begin` until it is committed or
//! dropped, so units of work are fully serialized.
use crate::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleOrder, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleStore, ArticleTransaction, ArticleVersion, ArticleView, PageRequest,
    ReviewComment, SectionRef,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::section::{Section, SectionId, SectionName, SectionRepository, SectionSlug};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Same rows the initial migration seeds.
const DEFAULT_SECTIONS: [(u128, &str, &str); 8] = [
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a01, "Política", "politica"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a02, "Sociedad", "sociedad"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a03, "Cultura", "cultura"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a04, "Economía", "economia"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a05, "Educación y Civismo", "educacion-y-civismo"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a06, "Diáspora", "diaspora"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a07, "Opinión", "opinion"),
    (0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a08, "Análisis y Datos", "analisis-y-datos"),
];

pub fn default_sections(created_at: DateTime<Utc>) -> DomainResult<Vec<Section>> {
    DEFAULT_SECTIONS
        .iter()
        .zip(1..)
        .map(|(&(id, name, slug), sort_order)| {
            Ok(Section {
                id: SectionId::from_uuid(Uuid::from_u128(id)),
                name: SectionName::new(name)?,
                slug: SectionSlug::new(slug)?,
                description: None,
                sort_order,
                is_active: true,
                created_at,
                updated_at: None,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
struct MemoryState {
    articles: HashMap<ArticleId, Article>,
    sections: HashMap<SectionId, Section>,
    comments: Vec<ReviewComment>,
}

impl MemoryState {
    fn article_slug_taken(&self, slug: &ArticleSlug, exclude: Option<ArticleId>) -> bool {
        self.articles
            .values()
            .any(|article| &article.slug == slug && Some(article.id) != exclude)
    }

    fn section_slug_taken(&self, slug: &SectionSlug, exclude: SectionId) -> bool {
        self.sections
            .values()
            .any(|section| &section.slug == slug && section.id != exclude)
    }

    fn view(&self, article: &Article) -> DomainResult<ArticleView> {
        let section = self.sections.get(&article.section_id).ok_or_else(|| {
            DomainError::Persistence(format!(
                "section {} referenced by article {} is missing",
                article.section_id, article.id
            ))
        })?;
        Ok(ArticleView {
            article: article.clone(),
            section: SectionRef::from(section),
        })
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let state = MemoryState {
            sections: sections
                .into_iter()
                .map(|section| (section.id, section))
                .collect(),
            ..MemoryState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Number of stored articles, drafts included.
    pub async fn article_count(&self) -> usize {
        self.state.lock().await.articles.len()
    }
}

fn compare(order: ArticleOrder, a: &Article, b: &Article) -> Ordering {
    match order {
        ArticleOrder::CreatedDesc => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
        ArticleOrder::IssueDateDesc => b
            .issue_date
            .cmp(&a.issue_date)
            .then(b.published_at.cmp(&a.published_at))
            .then(b.id.cmp(&a.id)),
        ArticleOrder::PublishedDesc => b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)),
        ArticleOrder::SubmittedAsc => (a.submitted_at.is_none(), a.submitted_at)
            .cmp(&(b.submitted_at.is_none(), b.submitted_at))
            .then(a.id.cmp(&b.id)),
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(InMemoryTransaction {
            guard,
            staged: Some(staged),
        }))
    }
}

/// Writes go to a staged copy that replaces the shared state on commit.
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    staged: Option<MemoryState>,
}

impl InMemoryTransaction {
    fn staged(&mut self) -> DomainResult<&mut MemoryState> {
        self.staged
            .as_mut()
            .ok_or_else(|| DomainError::Persistence("transaction already finished".into()))
    }
}

#[async_trait]
impl ArticleTransaction for InMemoryTransaction {
    async fn find_article_for_update(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.staged()?.articles.get(&id).cloned())
    }

    async fn find_section(&mut self, id: SectionId) -> DomainResult<Option<Section>> {
        Ok(self.staged()?.sections.get(&id).cloned())
    }

    async fn slug_taken(
        &mut self,
        slug: &ArticleSlug,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        Ok(self.staged()?.article_slug_taken(slug, exclude))
    }

    async fn count_issued_on(&mut self, issue_date: NaiveDate) -> DomainResult<u64> {
        let count = self
            .staged()?
            .articles
            .values()
            .filter(|a| a.published_at.is_some() && a.issue_date == Some(issue_date))
            .count();
        Ok(count as u64)
    }

    async fn insert_article(&mut self, article: &Article) -> DomainResult<()> {
        let state = self.staged()?;
        if !state.sections.contains_key(&article.section_id) {
            return Err(DomainError::NotFound("section not found".into()));
        }
        if state.articles.contains_key(&article.id) {
            return Err(DomainError::Conflict("article id already exists".into()));
        }
        if state.article_slug_taken(&article.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.articles.insert(article.id, article.clone());
        Ok(())
    }

    async fn update_article(
        &mut self,
        article: &Article,
        expected: ArticleVersion,
    ) -> DomainResult<()> {
        let state = self.staged()?;
        if state.article_slug_taken(&article.slug, Some(article.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        match state.articles.get_mut(&article.id) {
            Some(stored) if stored.version() == expected => {
                *stored = article.clone();
                Ok(())
            }
            _ => Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            )),
        }
    }

    async fn insert_review_comment(&mut self, comment: &ReviewComment) -> DomainResult<()> {
        let state = self.staged()?;
        if !state.articles.contains_key(&comment.article_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.push(comment.clone());
        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        let staged = self
            .staged
            .take()
            .ok_or_else(|| DomainError::Persistence("transaction already finished".into()))?;
        *self.guard = staged;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        let state = self.state.lock().await;
        state.articles.get(&id).map(|a| state.view(a)).transpose()
    }

    async fn find_published_by_slug(
        &self,
        slug: &ArticleSlug,
    ) -> DomainResult<Option<ArticleView>> {
        let state = self.state.lock().await;
        state
            .articles
            .values()
            .find(|a| &a.slug == slug && a.status == ArticleStatus::Published)
            .map(|a| state.view(a))
            .transpose()
    }

    async fn list(
        &self,
        filter: &ArticleListFilter,
        order: ArticleOrder,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleView>, u64)> {
        let state = self.state.lock().await;
        let mut matching: Vec<&Article> = state
            .articles
            .values()
            .filter(|a| filter.matches(a))
            .collect();
        matching.sort_by(|a, b| compare(order, a, b));

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.page_size() as usize)
            .map(|a| state.view(a))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((items, total))
    }

    async fn list_review_comments(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ReviewComment>> {
        let state = self.state.lock().await;
        let mut comments: Vec<ReviewComment> = state
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        // later inserts first on equal timestamps
        comments.reverse();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }
}

#[async_trait]
impl SectionRepository for InMemoryStore {
    async fn list_active(&self) -> DomainResult<Vec<Section>> {
        let state = self.state.lock().await;
        let mut sections: Vec<Section> = state
            .sections
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        sections.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.as_str().cmp(b.name.as_str()))
        });
        Ok(sections)
    }

    async fn find_by_id(&self, id: SectionId) -> DomainResult<Option<Section>> {
        Ok(self.state.lock().await.sections.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &SectionSlug) -> DomainResult<Option<Section>> {
        let state = self.state.lock().await;
        Ok(state.sections.values().find(|s| &s.slug == slug).cloned())
    }

    async fn insert(&self, section: &Section) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        if state.section_slug_taken(&section.slug, section.id) {
            return Err(DomainError::Conflict("section slug already exists".into()));
        }
        state.sections.insert(section.id, section.clone());
        Ok(())
    }

    async fn update(&self, section: &Section) -> DomainResult<()> {
        let mut state = self.state.lock().await;
        if state.section_slug_taken(&section.slug, section.id) {
            return Err(DomainError::Conflict("section slug already exists".into()));
        }
        match state.sections.get_mut(&section.id) {
            Some(stored) => {
                *stored = section.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound("section not found".into())),
        }
    }
}
