// src/main.rs
use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use newsdesk_core::application::{
    ports::{ClockPort, SlugGeneratorPort, TokenManagerPort},
    services::{ApplicationServices, Repositories, WorkflowSettings},
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::infrastructure::{
    database,
    repositories::{
        InMemoryStore, PostgresArticleReadRepository, PostgresArticleStore,
        PostgresSectionRepository, default_sections,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn repositories(config: &AppConfig) -> Result<Repositories> {
    if config.uses_memory_store() {
        tracing::warn!("using the in-memory store; data is lost on shutdown");
        let store = InMemoryStore::with_sections(default_sections(Utc::now())?);
        return Ok(Repositories {
            article_store: Arc::new(store.clone()),
            article_reads: Arc::new(store.clone()),
            sections: Arc::new(store),
        });
    }

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;

    Ok(Repositories {
        article_store: Arc::new(PostgresArticleStore::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        sections: Arc::new(PostgresSectionRepository::new(pool)),
    })
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repositories = repositories(&config).await?;

    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let settings = WorkflowSettings {
        daily_issue_quota: config.daily_issue_quota(),
        recent_window: ChronoDuration::days(i64::from(config.recent_window_days())),
    };

    let services = Arc::new(ApplicationServices::new(
        repositories,
        token_manager,
        clock,
        slugger,
        settings,
    ));

    let app = build_router(HttpState { services }, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
