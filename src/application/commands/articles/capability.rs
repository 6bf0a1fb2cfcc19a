// src/application/commands/articles/capability.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{actor::Actor, article::WorkflowEvent},
};

pub(super) fn ensure_capability(
    actor: &Actor,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability {resource}:{action}"
        )))
    }
}

/// Role check for a lifecycle event; runs before anything is loaded.
pub(super) fn ensure_event_allowed(actor: &Actor, event: WorkflowEvent) -> ApplicationResult<()> {
    let (resource, action) = event.required_capability();
    ensure_capability(actor, resource, action)
}
