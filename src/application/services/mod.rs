// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, sections::SectionCommandService},
        ports::{
            ClockPort, SlugGeneratorPort, TokenManagerPort, security::TokenManager,
        },
        queries::{articles::ArticleQueryService, sections::SectionQueryService},
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleStore,
            services::{ArticleSlugService, IssueDateScheduler},
        },
        section::SectionRepository,
    },
};

/// Tunables of the editorial workflow.
#[derive(Debug, Clone, Copy)]
pub struct WorkflowSettings {
    pub daily_issue_quota: u32,
    pub recent_window: Duration,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            daily_issue_quota: crate::domain::article::services::DEFAULT_DAILY_QUOTA,
            recent_window: Duration::days(7),
        }
    }
}

/// Persistence adapters the services are wired against.
pub struct Repositories {
    pub article_store: Arc<dyn ArticleStore>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub sections: Arc<dyn SectionRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub section_commands: Arc<SectionCommandService>,
    pub section_queries: Arc<SectionQueryService>,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(
        repositories: Repositories,
        token_manager: Arc<TokenManagerPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        settings: WorkflowSettings,
    ) -> Self {
        let Repositories {
            article_store,
            article_reads,
            sections,
        } = repositories;

        let slug_service = Arc::new(ArticleSlugService::new(Arc::clone(&slugger)));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_store,
            slug_service,
            IssueDateScheduler::new(settings.daily_issue_quota),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_reads,
            Arc::clone(&sections),
            Arc::clone(&clock),
            settings.recent_window,
        ));

        let section_commands = Arc::new(SectionCommandService::new(
            Arc::clone(&sections),
            slugger,
            clock,
        ));
        let section_queries = Arc::new(SectionQueryService::new(sections));

        Self {
            article_commands,
            article_queries,
            section_commands,
            section_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
