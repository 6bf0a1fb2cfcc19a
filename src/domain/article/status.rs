use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Lifecycle position of an article. Persisted as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ArticleStatus {
    Draft,
    Submitted,
    InReview,
    ChangesRequested,
    Approved,
    Published,
    Archived,
}

impl ArticleStatus {
    pub const ALL: [Self; 7] = [
        Self::Draft,
        Self::Submitted,
        Self::InReview,
        Self::ChangesRequested,
        Self::Approved,
        Self::Published,
        Self::Archived,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::InReview => "InReview",
            Self::ChangesRequested => "ChangesRequested",
            Self::Approved => "Approved",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }

    pub const fn ordinal(self) -> i16 {
        match self {
            Self::Draft => 0,
            Self::Submitted => 1,
            Self::InReview => 2,
            Self::ChangesRequested => 3,
            Self::Approved => 4,
            Self::Published => 5,
            Self::Archived => 6,
        }
    }

    pub fn from_ordinal(value: i16) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.ordinal() == value)
            .ok_or_else(|| DomainError::Persistence(format!("unknown article status {value}")))
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::Validation(format!("unknown article status '{s}'")))
    }
}
