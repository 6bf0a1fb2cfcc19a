// src/application/commands/articles/publish.rs
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
        article::{ArticleId, WorkflowEvent},
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct PublishArticleCommand {
    pub id: Uuid,
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &Actor,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_event_allowed(actor, WorkflowEvent::Publish)?;
        let id = ArticleId::from_uuid(command.id);
        retry_on_conflict("publish article", || self.publish_once(actor, id)).await
    }

    async fn publish_once(&self, actor: &Actor, id: ArticleId) -> ApplicationResult<ArticleDetailDto> {
        let now = self.clock.now();
        let mut tx = self.store.begin().await?;
        let mut article = load_article(tx.as_mut(), actor, id, WorkflowEvent::Publish).await?;

        // The quota is only consulted for articles that may actually be published.
        article.ensure_can(WorkflowEvent::Publish)?;
        let issue_date = self.scheduler.assign(tx.as_mut(), now).await?;

        let expected = article.version();
        article.publish(issue_date, now)?;
        tx.update_article(&article, expected).await?;

        tracing::info!(article_id = %article.id, %issue_date, "issue date assigned");
        log_transition(actor, &article, expected.status);
        finish(tx, article).await
    }
}
