use crate::domain::article::{ArticleStatus, ArticleView, ReviewComment};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub slug: String,
    pub content: String,
    pub status: ArticleStatus,
    pub section_id: Uuid,
    pub section_name: String,
    pub section_slug: String,
    pub author_id: String,
    pub issue_date: Option<NaiveDate>,
    #[serde(default, with = "serde_time::option")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleView> for ArticleDetailDto {
    fn from(view: ArticleView) -> Self {
        let ArticleView { article, section } = view;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            subtitle: article.subtitle.map(Into::into),
            slug: article.slug.into(),
            content: article.content.into(),
            status: article.status,
            section_id: section.id.into(),
            section_name: section.name.into(),
            section_slug: section.slug.into(),
            author_id: article.author_id.into(),
            issue_date: article.issue_date,
            submitted_at: article.submitted_at,
            published_at: article.published_at,
            archived_at: article.archived_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// List entry; omits the article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub slug: String,
    pub status: ArticleStatus,
    pub section_id: Uuid,
    pub section_name: String,
    pub section_slug: String,
    pub author_id: String,
    pub issue_date: Option<NaiveDate>,
    #[serde(default, with = "serde_time::option")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleView> for ArticleSummaryDto {
    fn from(view: ArticleView) -> Self {
        let ArticleView { article, section } = view;
        Self {
            id: article.id.into(),
            title: article.title.into(),
            subtitle: article.subtitle.map(Into::into),
            slug: article.slug.into(),
            status: article.status,
            section_id: section.id.into(),
            section_name: section.name.into(),
            section_slug: section.slug.into(),
            author_id: article.author_id.into(),
            issue_date: article.issue_date,
            submitted_at: article.submitted_at,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReviewCommentDto {
    pub id: Uuid,
    pub article_id: Uuid,
    pub editor_id: String,
    pub comment: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ReviewComment> for ReviewCommentDto {
    fn from(comment: ReviewComment) -> Self {
        Self {
            id: comment.id.as_uuid(),
            article_id: comment.article_id.into(),
            editor_id: comment.editor_id.into(),
            comment: comment.comment.into(),
            created_at: comment.created_at,
        }
    }
}
