//! Comment management service.

use crate::domain::entities::{Comment, CommentPatch, CommentSort, NewComment};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{CommentRepository, NewsRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing comments.
///
/// A comment can only be attached to an existing news.
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    news: Arc<dyn NewsRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comments: Arc<dyn CommentRepository>, news: Arc<dyn NewsRepository>) -> Self {
        Self { comments, news }
    }

    pub async fn get_all(
        &self,
        request: PageRequest<CommentSort>,
    ) -> Result<Page<Comment>, AppError> {
        let (items, total) =
            tokio::try_join!(self.comments.find_page(request), self.comments.count())?;

        Ok(Page::new(items, &request, total))
    }

    /// Retrieves a comment by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Comment, AppError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found", json!({ "id": id })))
    }

    /// Lists the comments of a news. Comments of a deleted news are gone with
    /// it, so an unknown news yields an empty list.
    pub async fn get_by_news_id(&self, news_id: i64) -> Result<Vec<Comment>, AppError> {
        self.comments.find_by_news_id(news_id).await
    }

    /// Creates a comment on an existing news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news does not exist.
    pub async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        self.ensure_news_exists(new_comment.news_id).await?;

        let comment = self.comments.create(new_comment).await?;
        tracing::info!(comment_id = comment.id, news_id = comment.news_id, "Comment created");
        Ok(comment)
    }

    /// Replaces every field of a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment or the target news does
    /// not exist.
    pub async fn update_by_id(&self, id: i64, comment: NewComment) -> Result<Comment, AppError> {
        self.get_by_id(id).await?;
        self.ensure_news_exists(comment.news_id).await?;
        self.store(id, comment).await
    }

    /// Applies the fields present in `patch`, keeping the rest.
    pub async fn patch_by_id(&self, id: i64, patch: CommentPatch) -> Result<Comment, AppError> {
        let current = self.get_by_id(id).await?;
        let merged = patch.apply_to(&current);

        if merged.news_id != current.news_id {
            self.ensure_news_exists(merged.news_id).await?;
        }

        self.store(id, merged).await
    }

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    pub async fn remove_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.comments.delete(id).await? {
            return Err(AppError::not_found("Comment not found", json!({ "id": id })));
        }

        tracing::info!(comment_id = id, "Comment deleted");
        Ok(())
    }

    async fn store(&self, id: i64, comment: NewComment) -> Result<Comment, AppError> {
        self.comments
            .update(id, comment)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found", json!({ "id": id })))
    }

    async fn ensure_news_exists(&self, news_id: i64) -> Result<(), AppError> {
        if !self.news.exists(news_id).await? {
            return Err(AppError::not_found(
                "News not found",
                json!({ "newsId": news_id }),
            ));
        }
        Ok(())
    }
}
