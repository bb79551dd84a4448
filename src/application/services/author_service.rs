//! Author management service.

use crate::domain::entities::{Author, AuthorPatch, AuthorSort, NewAuthor};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing authors.
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    /// Creates a new author service.
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Returns one page of authors and the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all(&self, request: PageRequest<AuthorSort>) -> Result<Page<Author>, AppError> {
        let (items, total) =
            tokio::try_join!(self.repository.find_page(request), self.repository.count())?;

        Ok(Page::new(items, &request, total))
    }

    /// Retrieves an author by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Author, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }

    /// Retrieves the author of a news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_news_id(&self, news_id: i64) -> Result<Author, AppError> {
        self.repository
            .find_by_news_id(news_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("News not found", json!({ "newsId": news_id }))
            })
    }

    /// Creates a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let author = self.repository.create(new_author).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(author)
    }

    /// Replaces every field of an author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_by_id(&self, id: i64, author: NewAuthor) -> Result<Author, AppError> {
        self.repository
            .update(id, author)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found", json!({ "id": id })))
    }

    /// Applies the fields present in `patch`, keeping the rest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn patch_by_id(&self, id: i64, patch: AuthorPatch) -> Result<Author, AppError> {
        let current = self.get_by_id(id).await?;
        self.update_by_id(id, patch.apply_to(&current)).await
    }

    /// Deletes an author that no news refers to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author does not exist.
    /// Returns [`AppError::Validation`] if news still reference the author.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_by_id(&self, id: i64) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        let news_count = self.repository.count_news(id).await?;
        if news_count > 0 {
            return Err(AppError::bad_request(
                "Cannot delete author with existing news",
                json!({ "id": id, "newsCount": news_count }),
            ));
        }

        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Author not found", json!({ "id": id })));
        }

        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }
}
