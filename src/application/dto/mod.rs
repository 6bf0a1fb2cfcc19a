pub mod articles;
pub mod auth;
pub mod pagination;
pub mod sections;
pub mod serde_time;

pub use articles::{ArticleDetailDto, ArticleSummaryDto, ReviewCommentDto};
pub use auth::{AuthTokenDto, TokenSubject};
pub use pagination::PaginatedResult;
pub use sections::SectionDto;
