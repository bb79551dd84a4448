//! News management service.

use crate::domain::entities::{NewNews, News, NewsPatch, NewsSort};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{AuthorRepository, NewsRepository, TagRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing news.
///
/// Guarantees that every stored news points at an existing author and only
/// existing tags:
/// - the author is checked on create, on full update and when a patch changes it
/// - tags are checked whenever the tag set grows
pub struct NewsService {
    news: Arc<dyn NewsRepository>,
    authors: Arc<dyn AuthorRepository>,
    tags: Arc<dyn TagRepository>,
}

impl NewsService {
    /// Creates a new news service.
    pub fn new(
        news: Arc<dyn NewsRepository>,
        authors: Arc<dyn AuthorRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            news,
            authors,
            tags,
        }
    }

    /// Returns one page of news and the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all(&self, request: PageRequest<NewsSort>) -> Result<Page<News>, AppError> {
        let (items, total) = tokio::try_join!(self.news.find_page(request), self.news.count())?;

        Ok(Page::new(items, &request, total))
    }

    /// Retrieves a news by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<News, AppError> {
        self.news
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("News not found", json!({ "id": id })))
    }

    /// Creates a news with its tag associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the author or any tag does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_news: NewNews) -> Result<News, AppError> {
        let new_news = new_news.normalized();

        self.ensure_author_exists(new_news.author_id).await?;
        self.ensure_tags_exist(&new_news.tag_ids).await?;

        let news = self.news.create(new_news).await?;
        tracing::info!(news_id = news.id, author_id = news.author_id, "News created");
        Ok(news)
    }

    /// Replaces every field of a news, including its tag set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news, the author or any tag does
    /// not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_by_id(&self, id: i64, news: NewNews) -> Result<News, AppError> {
        let news = news.normalized();

        if !self.news.exists(id).await? {
            return Err(AppError::not_found("News not found", json!({ "id": id })));
        }

        self.ensure_author_exists(news.author_id).await?;
        self.ensure_tags_exist(&news.tag_ids).await?;

        self.store(id, news).await
    }

    /// Applies the fields present in `patch`, keeping the rest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news does not exist, or if the
    /// patch references a missing author or tag.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn patch_by_id(&self, id: i64, patch: NewsPatch) -> Result<News, AppError> {
        let current = self.get_by_id(id).await?;
        let merged = patch.apply_to(&current);

        if merged.author_id != current.author_id {
            self.ensure_author_exists(merged.author_id).await?;
        }

        let added_tags: Vec<i64> = merged
            .tag_ids
            .iter()
            .copied()
            .filter(|tag_id| !current.tag_ids.contains(tag_id))
            .collect();
        self.ensure_tags_exist(&added_tags).await?;

        self.store(id, merged).await
    }

    /// Deletes a news together with its comments and tag associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the news does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_by_id(&self, id: i64) -> Result<(), AppError> {
        if !self.news.delete(id).await? {
            return Err(AppError::not_found("News not found", json!({ "id": id })));
        }

        tracing::info!(news_id = id, "News deleted");
        Ok(())
    }

    async fn store(&self, id: i64, news: NewNews) -> Result<News, AppError> {
        self.news
            .update(id, news)
            .await?
            .ok_or_else(|| AppError::not_found("News not found", json!({ "id": id })))
    }

    async fn ensure_author_exists(&self, author_id: i64) -> Result<(), AppError> {
        if self.authors.find_by_id(author_id).await?.is_none() {
            return Err(AppError::not_found(
                "Author not found",
                json!({ "authorId": author_id }),
            ));
        }
        Ok(())
    }

    async fn ensure_tags_exist(&self, tag_ids: &[i64]) -> Result<(), AppError> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let missing = self.tags.find_missing_ids(tag_ids.to_vec()).await?;
        if !missing.is_empty() {
            return Err(AppError::not_found(
                "Tags not found",
                json!({ "tagIds": missing }),
            ));
        }
        Ok(())
    }
}
