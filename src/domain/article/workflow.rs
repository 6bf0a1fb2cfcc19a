// src/domain/article/workflow.rs
//! Editorial lifecycle transitions.
//!
//! Every permitted `(status, event)` pair is listed in [`TRANSITIONS`]; any
//! pair not present there is rejected with [`DomainError::InvalidTransition`].
use crate::domain::article::status::ArticleStatus;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowEvent {
    Submit,
    RequestChanges,
    Approve,
    Publish,
    Edit,
}

impl WorkflowEvent {
    pub const ALL: [Self; 5] = [
        Self::Submit,
        Self::RequestChanges,
        Self::Approve,
        Self::Publish,
        Self::Edit,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::RequestChanges => "request changes on",
            Self::Approve => "approve",
            Self::Publish => "publish",
            Self::Edit => "edit",
        }
    }

    /// Capability `(resource, action)` an actor must hold to raise this event.
    pub const fn required_capability(&self) -> (&'static str, &'static str) {
        match self {
            Self::Submit => ("articles", "submit:own"),
            Self::Edit => ("articles", "edit:own"),
            Self::RequestChanges | Self::Approve => ("articles", "review"),
            Self::Publish => ("articles", "publish"),
        }
    }

    /// Author-side events only apply to the caller's own articles.
    pub const fn is_owner_scoped(&self) -> bool {
        matches!(self, Self::Submit | Self::Edit)
    }
}

impl fmt::Display for WorkflowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use ArticleStatus as S;
use WorkflowEvent as E;

pub const TRANSITIONS: &[(ArticleStatus, WorkflowEvent, ArticleStatus)] = &[
    (S::Draft, E::Submit, S::Submitted),
    (S::ChangesRequested, E::Submit, S::Submitted),
    (S::Submitted, E::RequestChanges, S::ChangesRequested),
    (S::InReview, E::RequestChanges, S::ChangesRequested),
    (S::Submitted, E::Approve, S::Approved),
    (S::InReview, E::Approve, S::Approved),
    (S::Approved, E::Publish, S::Published),
    (S::Draft, E::Edit, S::Draft),
    (S::ChangesRequested, E::Edit, S::ChangesRequested),
];

pub fn next_status(from: ArticleStatus, event: WorkflowEvent) -> Option<ArticleStatus> {
    TRANSITIONS
        .iter()
        .find(|(source, trigger, _)| *source == from && *trigger == event)
        .map(|(_, _, target)| *target)
}

pub fn transition(from: ArticleStatus, event: WorkflowEvent) -> DomainResult<ArticleStatus> {
    next_status(from, event).ok_or(DomainError::InvalidTransition { from, event })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(from: ArticleStatus, event: WorkflowEvent) -> Option<ArticleStatus> {
        match (from, event) {
            (S::Draft | S::ChangesRequested, E::Submit) => Some(S::Submitted),
            (S::Submitted | S::InReview, E::RequestChanges) => Some(S::ChangesRequested),
            (S::Submitted | S::InReview, E::Approve) => Some(S::Approved),
            (S::Approved, E::Publish) => Some(S::Published),
            (S::Draft | S::ChangesRequested, E::Edit) => Some(from),
            _ => None,
        }
    }

    #[test]
    fn every_pair_matches_the_lifecycle() {
        for from in ArticleStatus::ALL {
            for event in WorkflowEvent::ALL {
                match expected(from, event) {
                    Some(target) => assert_eq!(transition(from, event).unwrap(), target),
                    None => match transition(from, event) {
                        Err(DomainError::InvalidTransition {
                            from: reported_from,
                            event: reported_event,
                        }) => {
                            assert_eq!(reported_from, from);
                            assert_eq!(reported_event, event);
                        }
                        other => panic!("{from:?} + {event:?} should be rejected, got {other:?}"),
                    },
                }
            }
        }
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for event in WorkflowEvent::ALL {
            assert!(next_status(S::Published, event).is_none());
            assert!(next_status(S::Archived, event).is_none());
        }
    }

    #[test]
    fn rejection_message_names_status_and_action() {
        let err = transition(S::Draft, E::Publish).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Draft"), "{message}");
        assert!(message.contains("publish"), "{message}");
    }

    #[test]
    fn only_author_events_are_owner_scoped() {
        assert!(E::Submit.is_owner_scoped());
        assert!(E::Edit.is_owner_scoped());
        assert!(!E::Approve.is_owner_scoped());
        assert!(!E::Publish.is_owner_scoped());
    }
}
