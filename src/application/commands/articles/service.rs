// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        actor::Actor,
        article::{
            Article, ArticleId, ArticleStatus, ArticleStore, ArticleTransaction, ArticleView,
            SectionRef, WorkflowEvent,
            services::{ArticleSlugService, IssueDateScheduler},
            specifications::OwnedByActorSpec,
        },
        section::{Section, SectionId},
    },
};

/// Drives articles through the editorial lifecycle. Every operation runs in a
/// single store transaction and returns the refreshed detail view.
pub struct ArticleCommandService {
    pub(super) store: Arc<dyn ArticleStore>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) scheduler: IssueDateScheduler,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        store: Arc<dyn ArticleStore>,
        slug_service: Arc<ArticleSlugService>,
        scheduler: IssueDateScheduler,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            slug_service,
            scheduler,
            clock,
        }
    }
}

/// Loads the article for `event`. Author-side events treat someone else's
/// article exactly like a missing one.
pub(super) async fn load_article(
    tx: &mut dyn ArticleTransaction,
    actor: &Actor,
    id: ArticleId,
    event: WorkflowEvent,
) -> ApplicationResult<Article> {
    let article = tx
        .find_article_for_update(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("article not found"))?;

    if event.is_owner_scoped() && !OwnedByActorSpec::new(actor, &article).is_satisfied() {
        return Err(ApplicationError::not_found("article not found"));
    }

    Ok(article)
}

pub(super) async fn require_active_section(
    tx: &mut dyn ArticleTransaction,
    id: SectionId,
) -> ApplicationResult<Section> {
    tx.find_section(id)
        .await?
        .filter(Section::accepts_articles)
        .ok_or_else(|| ApplicationError::not_found("section not found or inactive"))
}

/// Reads the section shown alongside the article, then commits.
pub(super) async fn finish(
    mut tx: Box<dyn ArticleTransaction>,
    article: Article,
) -> ApplicationResult<ArticleDetailDto> {
    let section = tx.find_section(article.section_id).await?.ok_or_else(|| {
        ApplicationError::infrastructure(format!(
            "section {} referenced by article {} is missing",
            article.section_id, article.id
        ))
    })?;
    tx.commit().await?;

    Ok(ArticleView {
        section: SectionRef::from(&section),
        article,
    }
    .into())
}

pub(super) fn log_transition(actor: &Actor, article: &Article, from: ArticleStatus) {
    tracing::info!(
        article_id = %article.id,
        actor = %actor.id,
        from = %from,
        to = %article.status,
        "article status changed"
    );
}
