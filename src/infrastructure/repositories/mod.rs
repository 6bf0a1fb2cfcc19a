// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_article;
mod postgres_section;

pub use error::map_sqlx;
pub use memory::{InMemoryStore, default_sections};
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleStore};
pub use postgres_section::PostgresSectionRepository;
