//! Tag management service.

use crate::domain::entities::{NewTag, Tag, TagPatch, TagSort};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::TagRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing tags.
pub struct TagService {
    repository: Arc<dyn TagRepository>,
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self, request: PageRequest<TagSort>) -> Result<Page<Tag>, AppError> {
        let (items, total) =
            tokio::try_join!(self.repository.find_page(request), self.repository.count())?;

        Ok(Page::new(items, &request, total))
    }

    /// Retrieves a tag by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Tag, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }

    /// Lists the tags of a news. A news that does not exist (or no longer
    /// exists) has no tags.
    pub async fn get_by_news_id(&self, news_id: i64) -> Result<Vec<Tag>, AppError> {
        self.repository.find_by_news_id(news_id).await
    }

    /// Creates a new tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken.
    pub async fn create(&self, new_tag: NewTag) -> Result<Tag, AppError> {
        let tag = self.repository.create(new_tag).await?;
        tracing::info!(tag_id = tag.id, "Tag created");
        Ok(tag)
    }

    pub async fn update_by_id(&self, id: i64, tag: NewTag) -> Result<Tag, AppError> {
        self.repository
            .update(id, tag)
            .await?
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }

    pub async fn patch_by_id(&self, id: i64, patch: TagPatch) -> Result<Tag, AppError> {
        let current = self.get_by_id(id).await?;
        self.update_by_id(id, patch.apply_to(&current)).await
    }

    /// Deletes a tag and detaches it from all news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist.
    pub async fn remove_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Tag not found", json!({ "id": id })));
        }

        tracing::info!(tag_id = id, "Tag deleted");
        Ok(())
    }
}
