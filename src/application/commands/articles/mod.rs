// src/application/commands/articles/mod.rs
mod capability;
mod create;
mod publish;
mod retry;
mod review;
mod service;
mod submit;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use publish::PublishArticleCommand;
pub use review::{ApproveArticleCommand, RequestChangesCommand};
pub use service::ArticleCommandService;
pub use submit::SubmitArticleCommand;
pub use update::UpdateArticleCommand;
