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
pub struct SubmitArticleCommand {
    pub id: Uuid,
}

impl ArticleCommandService {
    pub async fn submit_article(
        &self,
        actor: &Actor,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_event_allowed(actor, WorkflowEvent::Submit)?;
        let id = ArticleId::from_uuid(command.id);
        retry_on_conflict("submit article", || self.submit_once(actor, id)).await
    }

    async fn submit_once(&self, actor: &Actor, id: ArticleId) -> ApplicationResult<ArticleDetailDto> {
        let mut tx = self.store.begin().await?;
        let mut article = load_article(tx.as_mut(), actor, id, WorkflowEvent::Submit).await?;

        let expected = article.version();
        article.submit(self.clock.now())?;
        tx.update_article(&article, expected).await?;

        log_transition(actor, &article, expected.status);
        finish(tx, article).await
    }
}
