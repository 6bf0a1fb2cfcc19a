// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
};
use crate::domain::actor::Actor;
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Resolve a bearer token into the acting identity and its roles.
    async fn authenticate(&self, token: &str) -> ApplicationResult<Actor>;
}
