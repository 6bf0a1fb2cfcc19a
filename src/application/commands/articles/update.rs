use super::{
    ArticleCommandService,
    capability::ensure_event_allowed,
    retry::retry_on_conflict,
    service::{finish, load_article, require_active_section},
};
use crate::{
    application::{dto::ArticleDetailDto, error::ApplicationResult},
    domain::{
        actor::Actor,
        article::{
            ArticleContent, ArticleEdit, ArticleId, ArticleSubtitle, ArticleTitle, WorkflowEvent,
        },
        section::SectionId,
    },
};
use uuid::Uuid;

/// Author edit. Absent fields are left unchanged; a blank subtitle clears it
/// and blank content is ignored.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub section_id: Option<Uuid>,
}

struct ValidatedEdit {
    title: Option<ArticleTitle>,
    subtitle: Option<Option<ArticleSubtitle>>,
    content: Option<ArticleContent>,
    section_id: Option<SectionId>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &Actor,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_event_allowed(actor, WorkflowEvent::Edit)?;

        let UpdateArticleCommand {
            id,
            title,
            subtitle,
            content,
            section_id,
        } = command;
        let id = ArticleId::from_uuid(id);
        let edit = ValidatedEdit {
            title: title.map(ArticleTitle::new).transpose()?,
            subtitle: subtitle.map(|s| ArticleSubtitle::parse(Some(s))).transpose()?,
            content: content
                .filter(|c| !c.trim().is_empty())
                .map(ArticleContent::new)
                .transpose()?,
            section_id: section_id.map(SectionId::from_uuid),
        };

        retry_on_conflict("update article", || self.update_once(actor, id, &edit)).await
    }

    async fn update_once(
        &self,
        actor: &Actor,
        id: ArticleId,
        edit: &ValidatedEdit,
    ) -> ApplicationResult<ArticleDetailDto> {
        let now = self.clock.now();
        let mut tx = self.store.begin().await?;
        let mut article = load_article(tx.as_mut(), actor, id, WorkflowEvent::Edit).await?;
        article.ensure_can(WorkflowEvent::Edit)?;

        let mut changes = ArticleEdit {
            subtitle: edit.subtitle.clone(),
            content: edit.content.clone(),
            ..ArticleEdit::default()
        };

        if let Some(section_id) = edit.section_id {
            if section_id != article.section_id {
                require_active_section(tx.as_mut(), section_id).await?;
                changes.section_id = Some(section_id);
            }
        }

        if let Some(title) = edit.title.as_ref().filter(|t| **t != article.title) {
            let slug = self
                .slug_service
                .generate_unique_slug(tx.as_mut(), title, Some(article.id))
                .await?;
            changes.title = Some(title.clone());
            changes.slug = Some(slug);
        }

        let expected = article.version();
        article.edit(changes, now)?;
        tx.update_article(&article, expected).await?;

        tracing::info!(article_id = %article.id, actor = %actor.id, "article edited");
        finish(tx, article).await
    }
}
