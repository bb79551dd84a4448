//! Repository trait for tags.

use crate::domain::entities::{NewTag, Tag, TagSort};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Inserts a new tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a tag with the same name exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;

    async fn find_page(&self, request: PageRequest<TagSort>) -> Result<Vec<Tag>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Lists the tags of a news ordered by `id`. Empty when the news does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, AppError>;

    /// Returns the subset of `ids` with no matching tag, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_missing_ids(&self, ids: Vec<i64>) -> Result<Vec<i64>, AppError>;

    /// Renames a tag. Returns `None` when the tag does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another tag already has the name.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, tag: NewTag) -> Result<Option<Tag>, AppError>;

    /// Deletes a tag and detaches it from every news.
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
