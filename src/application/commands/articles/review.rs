// src/application/commands/articles/review.rs
use super::{
    ArticleCommandService,
    capability::ensure_event_allowed,
    retry::retry_on_conflict,
    service::{finish, load_article, log_transition},
};
use crate::{
    application::{dto::ArticleDetailDto, error::ApplicationResult},
    domain::{
        actor::Actor,
        article::{ArticleId, ReviewComment, WorkflowEvent},
    },
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RequestChangesCommand {
    pub id: Uuid,
    /// Stored as a review comment unless blank.
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ApproveArticleCommand {
    pub id: Uuid,
}

impl ArticleCommandService {
    pub async fn request_changes(
        &self,
        actor: &Actor,
        command: RequestChangesCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_event_allowed(actor, WorkflowEvent::RequestChanges)?;
        let id = ArticleId::from_uuid(command.id);
        let comment = command.comment.as_deref();
        retry_on_conflict("request changes", || {
            self.request_changes_once(actor, id, comment)
        })
        .await
    }

    async fn request_changes_once(
        &self,
        actor: &Actor,
        id: ArticleId,
        comment: Option<&str>,
    ) -> ApplicationResult<ArticleDetailDto> {
        let now = self.clock.now();
        let mut tx = self.store.begin().await?;
        let mut article =
            load_article(tx.as_mut(), actor, id, WorkflowEvent::RequestChanges).await?;

        let expected = article.version();
        article.request_changes(now)?;
        tx.update_article(&article, expected).await?;

        if let Some(comment) = ReviewComment::from_optional(article.id, &actor.id, comment, now) {
            tx.insert_review_comment(&comment).await?;
        }

        log_transition(actor, &article, expected.status);
        finish(tx, article).await
    }

    pub async fn approve_article(
        &self,
        actor: &Actor,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_event_allowed(actor, WorkflowEvent::Approve)?;
        let id = ArticleId::from_uuid(command.id);
        retry_on_conflict("approve article", || self.approve_once(actor, id)).await
    }

    async fn approve_once(&self, actor: &Actor, id: ArticleId) -> ApplicationResult<ArticleDetailDto> {
        let mut tx = self.store.begin().await?;
        let mut article = load_article(tx.as_mut(), actor, id, WorkflowEvent::Approve).await?;

        let expected = article.version();
        article.approve(self.clock.now())?;
        tx.update_article(&article, expected).await?;

        log_transition(actor, &article, expected.status);
        finish(tx, article).await
    }
}
