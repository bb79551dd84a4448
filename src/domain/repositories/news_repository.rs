//! Repository trait for news.

use crate::domain::entities::{NewNews, News, NewsSort};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing news and their tag associations.
///
/// Writes touching both the news row and its tags are atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNewsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Inserts a news together with its tag associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or a tag does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_news: NewNews) -> Result<News, AppError>;

    /// Finds a news by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<News>, AppError>;

    /// Loads one page ordered by the requested field, ties broken by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_page(&self, request: PageRequest<NewsSort>) -> Result<Vec<News>, AppError>;

    /// Counts all news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces all fields and the tag set of a news and refreshes
    /// `last_updated_date`.
    ///
    /// Returns `None` when the news does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the author or a tag does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, news: NewNews) -> Result<Option<News>, AppError>;

    /// Deletes a news, its comments and its tag associations.
    /// Returns `false` when nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Checks whether a news exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;
}
