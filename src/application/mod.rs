//! Application layer services implementing business logic.
//!
//! This layer is the service facade HTTP handlers talk to. Services coordinate
//! repository calls, enforce referential rules and translate absence into
//! [`crate::error::AppError::NotFound`].
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Authors
//! - [`services::news_service::NewsService`] - News with author and tag references
//! - [`services::tag_service::TagService`] - Tags
//! - [`services::comment_service::CommentService`] - Comments attached to news

pub mod services;
