//! Repository trait for comments.

use crate::domain::entities::{Comment, CommentSort, NewComment};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the news does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError>;

    async fn find_page(&self, request: PageRequest<CommentSort>)
    -> Result<Vec<Comment>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the comments of a news ordered by `id`. Empty when the news does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Replaces all fields of a comment. Returns `None` when it does not exist.
    async fn update(&self, id: i64, comment: NewComment) -> Result<Option<Comment>, AppError>;

    /// Deletes a comment. Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
