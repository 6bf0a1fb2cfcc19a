// tests/support/mocks/security.rs
use async_trait::async_trait;
use newsdesk_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use newsdesk_core::domain::actor::{Actor, ActorId, Role};

use super::time::fixed_now;

/// 記者 a1 のトークン
pub const AUTHOR_TOKEN: &str = "author-token";
/// 記者 a2 のトークン
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
/// 編集者 e1 のトークン
pub const EDITOR_TOKEN: &str = "editor-token";
/// 期限切れとして扱われるトークン
pub const EXPIRED_TOKEN: &str = "expired-token";

pub fn author() -> Actor {
    Actor::new(ActorId::new("a1").unwrap(), [Role::Author])
}

pub fn other_author() -> Actor {
    Actor::new(ActorId::new("a2").unwrap(), [Role::Author])
}

pub fn editor() -> Actor {
    Actor::new(ActorId::new("e1").unwrap(), [Role::Editor])
}

/// 固定トークンをアクターに対応付けるダミーのトークンマネージャ
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-{}", subject.actor_id),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<Actor> {
        match token {
            AUTHOR_TOKEN => Ok(author()),
            OTHER_AUTHOR_TOKEN => Ok(other_author()),
            EDITOR_TOKEN => Ok(editor()),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
