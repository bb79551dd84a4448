//! Business logic services for the application layer.

pub mod author_service;
pub mod comment_service;
pub mod news_service;
pub mod tag_service;

pub use author_service::AuthorService;
pub use comment_service::CommentService;
pub use news_service::NewsService;
pub use tag_service::TagService;
