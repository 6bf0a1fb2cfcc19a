// src/application/commands/articles/retry.rs
use std::future::Future;

use crate::application::error::{ApplicationError, ApplicationResult};

/// Runs `attempt` and, if storage reports a conflict (lost update or a slug
/// taken between probe and write), runs it exactly once more from scratch.
/// A second conflict is reported as a transient failure.
pub(super) async fn retry_on_conflict<T, F, Fut>(
    operation: &'static str,
    mut attempt: F,
) -> ApplicationResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApplicationResult<T>>,
{
    match attempt().await {
        Err(err) if err.is_storage_conflict() => {
            tracing::warn!(operation, error = %err, "storage conflict, retrying once");
            match attempt().await {
                Err(err) if err.is_storage_conflict() => {
                    tracing::warn!(operation, error = %err, "storage conflict persisted after retry");
                    Err(ApplicationError::unavailable(format!(
                        "{operation} could not complete due to concurrent changes, please retry"
                    )))
                }
                other => other,
            }
        }
        other => other,
    }
}
