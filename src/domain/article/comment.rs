use crate::domain::actor::ActorId;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewCommentId(Uuid);

impl ReviewCommentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ReviewCommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCommentText(String);

impl ReviewCommentText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ReviewCommentText> for String {
    fn from(value: ReviewCommentText) -> Self {
        value.0
    }
}

/// Editor feedback attached to an article. Append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment {
    pub id: ReviewCommentId,
    pub article_id: ArticleId,
    pub editor_id: ActorId,
    pub comment: ReviewCommentText,
    pub created_at: DateTime<Utc>,
}

impl ReviewComment {
    /// Blank or absent text yields no comment at all.
    pub fn from_optional(
        article_id: ArticleId,
        editor_id: &ActorId,
        text: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        let comment = ReviewCommentText::new(text?).ok()?;
        Some(Self {
            id: ReviewCommentId::generate(),
            article_id,
            editor_id: editor_id.clone(),
            comment,
            created_at: now,
        })
    }
}
