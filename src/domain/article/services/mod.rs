// src/domain/article/services/mod.rs
mod scheduler;

pub use scheduler::{DEFAULT_DAILY_QUOTA, IssueDateScheduler};

use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleTransaction;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Normalized form of `text`, or [`DomainError::EmptySlug`] when nothing
    /// survives normalization.
    pub fn base_slug(&self, text: &str) -> DomainResult<String> {
        let base = self.generator.slugify(text);
        let base = truncate_slug(&base, ArticleSlug::MAX_CHARS);
        if base.is_empty() {
            return Err(DomainError::EmptySlug);
        }
        Ok(base)
    }

    /// Probes `base`, `base-2`, `base-3`, ... through `tx` until one is free.
    /// The article identified by `ignore_id` never counts as a collision.
    pub async fn generate_unique_slug(
        &self,
        tx: &mut dyn ArticleTransaction,
        title: &ArticleTitle,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.base_slug(title.as_str())?;

        let mut candidate = ArticleSlug::new(base.clone())?;
        let mut counter = 2u64;

        while tx.slug_taken(&candidate, ignore_id).await? {
            candidate = ArticleSlug::new(with_suffix(&base, counter))?;
            counter += 1;
        }

        Ok(candidate)
    }
}

fn truncate_slug(slug: &str, max_chars: usize) -> String {
    let truncated: String = slug.chars().take(max_chars).collect();
    truncated.trim_end_matches('-').to_string()
}

fn with_suffix(base: &str, counter: u64) -> String {
    let suffix = format!("-{counter}");
    let room = ArticleSlug::MAX_CHARS.saturating_sub(suffix.len());
    format!("{}{suffix}", truncate_slug(base, room))
}
