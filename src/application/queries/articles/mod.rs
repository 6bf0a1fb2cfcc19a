mod mine;
mod public;
mod review;
mod service;

pub use mine::{GetMyArticleQuery, ListMyArticlesQuery};
pub use public::{ArchiveQuery, GetPublishedArticleQuery, HomeFeedQuery, SectionFeedQuery};
pub use review::{ListReviewCommentsQuery, ReviewQueueQuery};
pub use service::ArticleQueryService;
