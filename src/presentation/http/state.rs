// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Carried to handlers as an `Extension`; cloning shares the service registry.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}
