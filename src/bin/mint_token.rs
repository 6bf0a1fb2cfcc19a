// src/bin/mint_token.rs
//! Issues a bearer token for local development:
//! `mint_token --actor <id> --role <author|editor> [--role ...]`
use anyhow::{Context, Result, bail};
use newsdesk_core::application::{dto::TokenSubject, ports::security::TokenManager};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::actor::{ActorId, Role};
use newsdesk_core::infrastructure::security::token::BiscuitTokenManager;

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<TokenSubject> {
    let mut actor = None;
    let mut roles = Vec::new();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let value = args
            .next()
            .with_context(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--actor" => actor = Some(ActorId::new(value)?),
            "--role" => roles.push(value.parse::<Role>()?),
            other => bail!("unknown argument {other}"),
        }
    }

    let actor_id = actor.context("--actor is required")?;
    if roles.is_empty() {
        bail!("at least one --role is required");
    }
    Ok(TokenSubject { actor_id, roles })
}

#[tokio::main]
async fn main() -> Result<()> {
    let subject = parse_args(std::env::args().skip(1))?;
    let config = AppConfig::from_env()?;
    let tokens = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;

    let issued = tokens.issue(subject).await?;
    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
    println!("{}", issued.token);
    Ok(())
}
