// tests/public_and_sections.rs
use chrono::Duration;
use newsdesk_core::application::{
    commands::{
        articles::{PublishArticleCommand, RequestChangesCommand},
        sections::{CreateSectionCommand, UpdateSectionCommand},
    },
    error::ApplicationError,
    queries::articles::{
        ArchiveQuery, GetPublishedArticleQuery, HomeFeedQuery, ListMyArticlesQuery,
        ListReviewCommentsQuery, ReviewQueueQuery, SectionFeedQuery,
    },
};
use newsdesk_core::domain::article::{ArticleStatus, PageRequest};

mod support;
use support::{
    TestApp, approved_article, author, draft_command, editor, other_author, submitted_article,
};

async fn published(app: &TestApp, title: &str) -> newsdesk_core::application::dto::ArticleDetailDto {
    let approved = approved_article(app, title).await;
    app.services
        .article_commands
        .publish_article(&editor(), PublishArticleCommand { id: approved.id })
        .await
        .unwrap()
}

/// ホームには直近の掲載記事だけが並び、期間を過ぎるとアーカイブに移る
#[tokio::test]
async fn home_feed_shows_recent_window_then_archive_takes_over() {
    let app = TestApp::new();
    let queries = &app.services.article_queries;

    published(&app, "Primera").await;
    app.clock.advance(Duration::hours(1));
    published(&app, "Segunda").await;
    approved_article(&app, "Sin publicar").await;

    let home = queries.home_feed(HomeFeedQuery::default()).await.unwrap();
    let slugs: Vec<_> = home.items.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["segunda", "primera"]);
    assert_eq!(home.total_items, 2);
    assert!(home.items.iter().all(|a| a.status == ArticleStatus::Published));

    let archive = queries.archive(ArchiveQuery::default()).await.unwrap();
    assert!(archive.items.is_empty());

    app.clock.advance(Duration::days(8));
    let home = queries.home_feed(HomeFeedQuery::default()).await.unwrap();
    assert!(home.items.is_empty());

    let archive = queries.archive(ArchiveQuery::default()).await.unwrap();
    let slugs: Vec<_> = archive.items.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["segunda", "primera"]);
}

#[tokio::test]
async fn section_feed_filters_by_active_section() {
    let app = TestApp::new();
    let queries = &app.services.article_queries;
    published(&app, "Cultural").await;

    let feed = queries
        .section_feed(SectionFeedQuery {
            section_slug: "cultura".into(),
            page: PageRequest::default(),
        })
        .await
        .unwrap();
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].section_name, "Cultura");

    let empty = queries
        .section_feed(SectionFeedQuery {
            section_slug: "politica".into(),
            page: PageRequest::default(),
        })
        .await
        .unwrap();
    assert!(empty.items.is_empty());

    for slug in ["deportes", "suplemento", ""] {
        let err = queries
            .section_feed(SectionFeedQuery {
                section_slug: slug.into(),
                page: PageRequest::default(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "slug {slug:?}");
    }
}

/// 公開記事はスラグで読めるが、未公開の記事は見えない
#[tokio::test]
async fn only_published_articles_are_readable_by_slug() {
    let app = TestApp::new();
    let queries = &app.services.article_queries;
    let article = published(&app, "Visible").await;
    submitted_article(&app, "Oculto").await;

    let found = queries
        .published_article(GetPublishedArticleQuery {
            slug: "visible".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.id, article.id);
    assert_eq!(found.content, "Cuerpo del artículo.");

    let err = queries
        .published_article(GetPublishedArticleQuery {
            slug: "oculto".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

/// レビュー待ちは入稿の古い順
#[tokio::test]
async fn review_queue_is_oldest_submission_first() {
    let app = TestApp::new();
    let queries = &app.services.article_queries;

    submitted_article(&app, "Antigua").await;
    app.clock.advance(Duration::minutes(10));
    submitted_article(&app, "Reciente").await;
    app.services
        .article_commands
        .create_article(&author(), draft_command("Borrador"))
        .await
        .unwrap();
    approved_article(&app, "Aprobada").await;

    let queue = queries
        .review_queue(&editor(), ReviewQueueQuery::default())
        .await
        .unwrap();
    let slugs: Vec<_> = queue.items.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["antigua", "reciente"]);

    let err = queries
        .review_queue(&author(), ReviewQueueQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

/// 差し戻しコメントは担当記者と編集者だけが読める
#[tokio::test]
async fn review_comments_are_visible_to_owner_and_editors() {
    let app = TestApp::new();
    let submitted = submitted_article(&app, "Con comentarios").await;
    let commands = &app.services.article_commands;
    commands
        .request_changes(
            &editor(),
            RequestChangesCommand {
                id: submitted.id,
                comment: Some("Primera ronda".into()),
            },
        )
        .await
        .unwrap();
    commands
        .submit_article(
            &author(),
            newsdesk_core::application::commands::articles::SubmitArticleCommand {
                id: submitted.id,
            },
        )
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(1));
    commands
        .request_changes(
            &editor(),
            RequestChangesCommand {
                id: submitted.id,
                comment: Some("Segunda ronda".into()),
            },
        )
        .await
        .unwrap();

    let query = ListReviewCommentsQuery {
        article_id: submitted.id,
    };
    let queries = &app.services.article_queries;

    let for_author = queries.list_review_comments(&author(), query).await.unwrap();
    let texts: Vec<_> = for_author.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(texts, vec!["Segunda ronda", "Primera ronda"]);

    let for_editor = queries.list_review_comments(&editor(), query).await.unwrap();
    assert_eq!(for_editor, for_author);

    let err = queries
        .list_review_comments(&other_author(), query)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn my_articles_lists_only_own_newest_first() {
    let app = TestApp::new();
    let commands = &app.services.article_commands;
    commands
        .create_article(&author(), draft_command("Mia uno"))
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(1));
    commands
        .create_article(&author(), draft_command("Mia dos"))
        .await
        .unwrap();
    commands
        .create_article(&other_author(), draft_command("Ajena"))
        .await
        .unwrap();

    let mine = app
        .services
        .article_queries
        .list_my_articles(
            &author(),
            ListMyArticlesQuery {
                page: PageRequest::new(1, 0),
            },
        )
        .await
        .unwrap();
    let slugs: Vec<_> = mine.items.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["mia-dos", "mia-uno"]);
    assert_eq!(mine.page_size, PageRequest::DEFAULT_PAGE_SIZE);
    assert_eq!(mine.total_pages, 1);

    let second_page = app
        .services
        .article_queries
        .list_my_articles(
            &author(),
            ListMyArticlesQuery {
                page: PageRequest::new(2, 1),
            },
        )
        .await
        .unwrap();
    assert_eq!(second_page.items.len(), 1);
    assert_eq!(second_page.items[0].slug, "mia-uno");
    assert_eq!(second_page.total_items, 2);
}

fn section_command(name: &str) -> CreateSectionCommand {
    CreateSectionCommand {
        name: name.into(),
        slug: None,
        description: Some("  ".into()),
        sort_order: 9,
        is_active: true,
    }
}

/// セクションは編集者が管理し、スラグは名前から作られる
#[tokio::test]
async fn editors_manage_sections() {
    let app = TestApp::new();
    let commands = &app.services.section_commands;

    let created = commands
        .create_section(&editor(), section_command("Ciencia y Tecnología"))
        .await
        .unwrap();
    assert_eq!(created.slug, "ciencia-y-tecnologia");
    assert_eq!(created.description, None);

    let err = commands
        .create_section(&editor(), section_command("Ciencia y tecnologia"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));

    let err = commands
        .create_section(&author(), section_command("Deportes"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let renamed = commands
        .update_section(
            &editor(),
            UpdateSectionCommand {
                id: created.id,
                name: Some("Ciencia".into()),
                ..UpdateSectionCommand::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "ciencia");
    assert!(renamed.updated_at.is_some());

    let err = commands
        .update_section(
            &editor(),
            UpdateSectionCommand {
                id: created.id,
                slug: Some("cultura".into()),
                ..UpdateSectionCommand::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn inactive_sections_are_not_listed() {
    let app = TestApp::new();
    let sections = app.services.section_queries.list_active().await.unwrap();

    let slugs: Vec<_> = sections.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs.len(), 8);
    assert_eq!(slugs[0], "politica");
    assert!(!slugs.contains(&"suplemento"));

    let politica = sections[0].id;
    app.services
        .section_commands
        .update_section(
            &editor(),
            UpdateSectionCommand {
                id: politica,
                is_active: Some(false),
                ..UpdateSectionCommand::default()
            },
        )
        .await
        .unwrap();
    let sections = app.services.section_queries.list_active().await.unwrap();
    assert_eq!(sections.len(), 7);
}
