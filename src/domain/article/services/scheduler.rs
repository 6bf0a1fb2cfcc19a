// src/domain/article/services/scheduler.rs
use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::domain::article::repository::ArticleTransaction;
use crate::domain::errors::{DomainError, DomainResult};

/// Articles that may share one issue date before publication spills over to
/// the next day.
pub const DEFAULT_DAILY_QUOTA: u32 = 5;

/// Assigns issue dates at publication time.
///
/// The quota is a soft limit: the count is read without a reservation, so two
/// publishes racing on the last free slot can both land on the same day.
#[derive(Debug, Clone, Copy)]
pub struct IssueDateScheduler {
    daily_quota: u32,
}

impl Default for IssueDateScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_QUOTA)
    }
}

impl IssueDateScheduler {
    pub const fn new(daily_quota: u32) -> Self {
        Self { daily_quota }
    }

    /// Today while the quota has room, otherwise tomorrow. Never further out.
    pub fn decide(&self, today: NaiveDate, already_issued: u64) -> DomainResult<NaiveDate> {
        if already_issued < u64::from(self.daily_quota) {
            return Ok(today);
        }
        today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DomainError::Validation("issue date out of range".into()))
    }

    pub async fn assign(
        &self,
        tx: &mut dyn ArticleTransaction,
        now: DateTime<Utc>,
    ) -> DomainResult<NaiveDate> {
        let today = now.date_naive();
        let already_issued = tx.count_issued_on(today).await?;
        let issue_date = self.decide(today, already_issued)?;
        tracing::debug!(%today, already_issued, %issue_date, "issue date assigned");
        Ok(issue_date)
    }
}
