// src/domain/article/entity.rs
use crate::domain::actor::ActorId;
use crate::domain::article::status::ArticleStatus;
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleSubtitle, ArticleTitle,
};
use crate::domain::article::workflow::{self, WorkflowEvent};
use crate::domain::errors::DomainResult;
use crate::domain::section::SectionId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: ActorId,
    pub section_id: SectionId,
    pub title: ArticleTitle,
    pub subtitle: Option<ArticleSubtitle>,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
    pub status: ArticleStatus,
    pub issue_date: Option<NaiveDate>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values a write is conditioned on; a stored row that no longer matches
/// them has been changed concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleVersion {
    pub status: ArticleStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: ActorId,
    pub section_id: SectionId,
    pub title: ArticleTitle,
    pub subtitle: Option<ArticleSubtitle>,
    pub content: ArticleContent,
    pub slug: ArticleSlug,
}

/// Content changes requested by the owning author. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ArticleEdit {
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub subtitle: Option<Option<ArticleSubtitle>>,
    pub content: Option<ArticleContent>,
    pub section_id: Option<SectionId>,
}

impl Article {
    pub fn draft(new: NewArticle, now: DateTime<Utc>) -> Self {
        let NewArticle {
            author_id,
            section_id,
            title,
            subtitle,
            content,
            slug,
        } = new;

        Self {
            id: ArticleId::generate(),
            author_id,
            section_id,
            title,
            subtitle,
            content,
            slug,
            status: ArticleStatus::Draft,
            issue_date: None,
            submitted_at: None,
            published_at: None,
            archived_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub const fn version(&self) -> ArticleVersion {
        ArticleVersion {
            status: self.status,
            updated_at: self.updated_at,
        }
    }

    pub fn ensure_can(&self, event: WorkflowEvent) -> DomainResult<ArticleStatus> {
        workflow::transition(self.status, event)
    }

    pub fn edit(&mut self, edit: ArticleEdit, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_can(WorkflowEvent::Edit)?;

        let ArticleEdit {
            title,
            slug,
            subtitle,
            content,
            section_id,
        } = edit;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(subtitle) = subtitle {
            self.subtitle = subtitle;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(section_id) = section_id {
            self.section_id = section_id;
        }
        self.updated_at = now;
        Ok(())
    }

    pub fn submit(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.status = self.ensure_can(WorkflowEvent::Submit)?;
        self.submitted_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn request_changes(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.status = self.ensure_can(WorkflowEvent::RequestChanges)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn approve(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.status = self.ensure_can(WorkflowEvent::Approve)?;
        self.updated_at = now;
        Ok(())
    }

    /// `issue_date` and `published_at` are only ever written here.
    pub fn publish(&mut self, issue_date: NaiveDate, now: DateTime<Utc>) -> DomainResult<()> {
        self.status = self.ensure_can(WorkflowEvent::Publish)?;
        self.issue_date = Some(issue_date);
        self.published_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    fn sample_article(status: ArticleStatus) -> Article {
        let mut article = Article::draft(
            NewArticle {
                author_id: ActorId::new("a1").unwrap(),
                section_id: SectionId::generate(),
                title: ArticleTitle::new("Hello World").unwrap(),
                subtitle: None,
                content: ArticleContent::new("body").unwrap(),
                slug: ArticleSlug::new("hello-world").unwrap(),
            },
            at(8),
        );
        article.status = status;
        article
    }

    #[test]
    fn draft_starts_without_publication_data() {
        let article = sample_article(ArticleStatus::Draft);
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.created_at, article.updated_at);
        assert!(article.issue_date.is_none());
        assert!(article.published_at.is_none());
        assert!(article.submitted_at.is_none());
    }

    #[test]
    fn full_lifecycle_sets_timestamps() {
        let mut article = sample_article(ArticleStatus::Draft);
        article.submit(at(9)).unwrap();
        assert_eq!(article.status, ArticleStatus::Submitted);
        assert_eq!(article.submitted_at, Some(at(9)));

        article.approve(at(10)).unwrap();
        assert_eq!(article.status, ArticleStatus::Approved);

        let day = at(11).date_naive();
        article.publish(day, at(11)).unwrap();
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.issue_date, Some(day));
        assert_eq!(article.published_at, Some(at(11)));
        assert_eq!(article.updated_at, at(11));
    }

    #[test]
    fn resubmission_refreshes_submitted_at() {
        let mut article = sample_article(ArticleStatus::Submitted);
        article.request_changes(at(9)).unwrap();
        assert_eq!(article.status, ArticleStatus::ChangesRequested);
        article.submit(at(10)).unwrap();
        assert_eq!(article.submitted_at, Some(at(10)));
    }

    #[test]
    fn rejected_transition_leaves_article_untouched() {
        let mut article = sample_article(ArticleStatus::Draft);
        let before = article.clone();
        let err = article
            .publish(at(9).date_naive(), at(9))
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTransition {
                from: ArticleStatus::Draft,
                event: WorkflowEvent::Publish
            }
        ));
        assert_eq!(article, before);
    }

    #[test]
    fn edit_is_limited_to_editable_states() {
        let mut article = sample_article(ArticleStatus::ChangesRequested);
        article
            .edit(
                ArticleEdit {
                    content: Some(ArticleContent::new("new body").unwrap()),
                    subtitle: Some(None),
                    ..ArticleEdit::default()
                },
                at(9),
            )
            .unwrap();
        assert_eq!(article.content.as_str(), "new body");
        assert_eq!(article.status, ArticleStatus::ChangesRequested);
        assert_eq!(article.updated_at, at(9));

        let mut approved = sample_article(ArticleStatus::Approved);
        let before = approved.clone();
        assert!(approved
            .edit(
                ArticleEdit {
                    title: Some(ArticleTitle::new("Other").unwrap()),
                    ..ArticleEdit::default()
                },
                at(9) + Duration::minutes(1),
            )
            .is_err());
        assert_eq!(approved, before);
    }
}
