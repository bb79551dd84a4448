//! Repository trait for authors.

use crate::domain::entities::{Author, AuthorSort, NewAuthor};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError>;

    /// Loads one page ordered by the requested field, ties broken by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_page(&self, request: PageRequest<AuthorSort>) -> Result<Vec<Author>, AppError>;

    /// Counts all authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Finds the author of a news.
    ///
    /// Returns `None` when the news does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_news_id(&self, news_id: i64) -> Result<Option<Author>, AppError>;

    /// Replaces all fields of an author.
    ///
    /// Returns `None` when the author does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, author: NewAuthor) -> Result<Option<Author>, AppError>;

    /// Deletes an author. Returns `false` when nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if news still reference the author.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts the news written by an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_news(&self, author_id: i64) -> Result<i64, AppError>;
}
