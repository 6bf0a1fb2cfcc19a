// src/application/commands/articles/create.rs
use super::{
    ArticleCommandService,
    capability::ensure_capability,
    retry::retry_on_conflict,
    service::{finish, require_active_section},
};
use crate::{
    application::{dto::ArticleDetailDto, error::ApplicationResult},
    domain::{
        actor::Actor,
        article::{Article, ArticleContent, ArticleSubtitle, ArticleTitle, NewArticle},
        section::SectionId,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub section_id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    section_id: Option<Uuid>,
    title: Option<String>,
    subtitle: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub const fn section_id(mut self, section_id: Uuid) -> Self {
        self.section_id = Some(section_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            section_id: self.section_id.ok_or("section_id is required")?,
            title: self.title.ok_or("title is required")?,
            subtitle: self.subtitle,
            content: self.content.ok_or("content is required")?,
        })
    }
}

struct ValidatedDraft {
    section_id: SectionId,
    title: ArticleTitle,
    subtitle: Option<ArticleSubtitle>,
    content: ArticleContent,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &Actor,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDetailDto> {
        ensure_capability(actor, "articles", "create")?;

        let draft = ValidatedDraft {
            section_id: SectionId::from_uuid(command.section_id),
            title: ArticleTitle::new(command.title)?,
            subtitle: ArticleSubtitle::parse(command.subtitle)?,
            content: ArticleContent::new(command.content)?,
        };

        retry_on_conflict("create article", || self.create_once(actor, &draft)).await
    }

    async fn create_once(
        &self,
        actor: &Actor,
        draft: &ValidatedDraft,
    ) -> ApplicationResult<ArticleDetailDto> {
        let now = self.clock.now();
        let mut tx = self.store.begin().await?;

        require_active_section(tx.as_mut(), draft.section_id).await?;
        let slug = self
            .slug_service
            .generate_unique_slug(tx.as_mut(), &draft.title, None)
            .await?;

        let article = Article::draft(
            NewArticle {
                author_id: actor.id.clone(),
                section_id: draft.section_id,
                title: draft.title.clone(),
                subtitle: draft.subtitle.clone(),
                content: draft.content.clone(),
                slug,
            },
            now,
        );
        tx.insert_article(&article).await?;

        tracing::info!(
            article_id = %article.id,
            actor = %actor.id,
            slug = %article.slug,
            "article drafted"
        );
        finish(tx, article).await
    }
}
