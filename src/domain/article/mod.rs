pub mod comment;
pub mod entity;
pub mod read_model;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod status;
pub mod value_objects;
pub mod workflow;

pub use comment::{ReviewComment, ReviewCommentId, ReviewCommentText};
pub use entity::{Article, ArticleEdit, ArticleVersion, NewArticle};
pub use read_model::{ArticleListFilter, ArticleOrder, ArticleView, PageRequest, SectionRef};
pub use repository::{ArticleReadRepository, ArticleStore, ArticleTransaction};
pub use status::ArticleStatus;
pub use value_objects::{ArticleContent, ArticleId, ArticleSlug, ArticleSubtitle, ArticleTitle};
pub use workflow::WorkflowEvent;
