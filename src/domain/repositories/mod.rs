//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! the seam the service facade depends on.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AuthorRepository`] - Author CRUD and lookup by news
//! - [`NewsRepository`] - News CRUD including tag associations
//! - [`TagRepository`] - Tag CRUD and lookup by news
//! - [`CommentRepository`] - Comment CRUD and lookup by news
//! - [`HealthRepository`] - Database connectivity probe
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod author_repository;
pub mod comment_repository;
pub mod health_repository;
pub mod news_repository;
pub mod tag_repository;

pub use author_repository::AuthorRepository;
pub use comment_repository::CommentRepository;
pub use health_repository::HealthRepository;
pub use news_repository::NewsRepository;
pub use tag_repository::TagRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use news_repository::MockNewsRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
