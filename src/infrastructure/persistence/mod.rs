//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters. Sort columns are the only interpolated SQL fragments and always
//! come from a [`crate::domain::pagination::SortField`] allow-list.
//!
//! # Repositories
//!
//! - [`PgAuthorRepository`] - Authors
//! - [`PgNewsRepository`] - News and their tag associations
//! - [`PgTagRepository`] - Tags
//! - [`PgCommentRepository`] - Comments
//! - [`PgHealthRepository`] - Connectivity probe

pub mod pg_author_repository;
pub mod pg_comment_repository;
pub mod pg_health_repository;
pub mod pg_news_repository;
pub mod pg_tag_repository;

pub use pg_author_repository::PgAuthorRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_news_repository::PgNewsRepository;
pub use pg_tag_repository::PgTagRepository;
