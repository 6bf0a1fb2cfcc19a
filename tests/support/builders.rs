// tests/support/builders.rs
use chrono::Utc;
use newsdesk_core::application::commands::articles::{
    ApproveArticleCommand, CreateArticleCommand, SubmitArticleCommand,
};
use newsdesk_core::application::dto::ArticleDetailDto;
use newsdesk_core::domain::section::{Section, SectionId, SectionName, SectionSlug};
use newsdesk_core::infrastructure::repositories::default_sections;
use uuid::Uuid;

use super::helpers::TestApp;
use super::mocks::{author, editor, fixed_now};

pub const POLITICA_ID: Uuid = Uuid::from_u128(0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a01);
pub const CULTURA_ID: Uuid = Uuid::from_u128(0x5b0f6b9e_3c1d_4f4e_9a57_0d6c2a9e1a03);
pub const INACTIVE_SECTION_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_dead);

/// 既定の 8 セクションに、非アクティブなセクションを 1 つ加えたもの
pub fn seed_sections() -> Vec<Section> {
    let mut sections = default_sections(fixed_now()).unwrap();
    sections.push(Section {
        id: SectionId::from_uuid(INACTIVE_SECTION_ID),
        name: SectionName::new("Suplemento").unwrap(),
        slug: SectionSlug::new("suplemento").unwrap(),
        description: None,
        sort_order: 99,
        is_active: false,
        created_at: Utc::now(),
        updated_at: None,
    });
    sections
}

pub fn draft_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .section_id(CULTURA_ID)
        .title(title)
        .content("Cuerpo del artículo.")
        .build()
        .unwrap()
}

/// 記者 a1 の記事を作成して入稿する
pub async fn submitted_article(app: &TestApp, title: &str) -> ArticleDetailDto {
    let commands = &app.services.article_commands;
    let draft = commands
        .create_article(&author(), draft_command(title))
        .await
        .unwrap();
    commands
        .submit_article(&author(), SubmitArticleCommand { id: draft.id })
        .await
        .unwrap()
}

/// 入稿から承認までを済ませた記事
pub async fn approved_article(app: &TestApp, title: &str) -> ArticleDetailDto {
    let submitted = submitted_article(app, title).await;
    app.services
        .article_commands
        .approve_article(&editor(), ApproveArticleCommand { id: submitted.id })
        .await
        .unwrap()
}
