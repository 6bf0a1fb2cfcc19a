// src/domain/errors.rs
use crate::domain::article::{ArticleStatus, WorkflowEvent};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("cannot {event} an article with status '{from}'")]
    InvalidTransition {
        from: ArticleStatus,
        event: WorkflowEvent,
    },
    #[error("title must contain at least one letter or digit")]
    EmptySlug,
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
