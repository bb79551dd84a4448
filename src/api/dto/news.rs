//! DTOs for news endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewNews, News, NewsPatch};

/// Request body for `POST /news` and `PUT /news/{id}`.
///
/// `tagIds` may be omitted, which stores the news without tags. On `PUT`
/// the list replaces the current tag set.
///
/// ```json
/// {
///   "title": "Rust 2024 edition",
///   "content": "The edition is out",
///   "authorId": 1,
///   "tagIds": [2, 5]
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    pub author_id: i64,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl From<NewsRequest> for NewNews {
    fn from(request: NewsRequest) -> Self {
        NewNews {
            title: request.title,
            content: request.content,
            author_id: request.author_id,
            tag_ids: request.tag_ids,
        }
    }
}

/// Request body for `PATCH /news/{id}`.
///
/// A present `tagIds` replaces the whole tag set; `[]` removes all tags.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsPatchRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub author_id: Option<i64>,

    #[serde(default)]
    pub tag_ids: Option<Vec<i64>>,
}

impl From<NewsPatchRequest> for NewsPatch {
    fn from(request: NewsPatchRequest) -> Self {
        NewsPatch {
            title: request.title,
            content: request.content,
            author_id: request.author_id,
            tag_ids: request.tag_ids,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub tag_ids: Vec<i64>,
    pub created_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl From<News> for NewsResponse {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            title: news.title,
            content: news.content,
            author_id: news.author_id,
            tag_ids: news.tag_ids,
            created_date: news.created_date,
            last_updated_date: news.last_updated_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, content: &str) -> NewsRequest {
        NewsRequest {
            title: title.to_string(),
            content: content.to_string(),
            author_id: 1,
            tag_ids: vec![],
        }
    }

    #[test]
    fn test_tag_ids_default_to_empty() {
        let request: NewsRequest =
            serde_json::from_str(r#"{"title": "Hello", "content": "World", "authorId": 1}"#)
                .unwrap();
        assert!(request.tag_ids.is_empty());
    }

    #[test]
    fn test_title_and_content_required() {
        assert!(request("A", "B").validate().is_ok());
        assert!(request("", "B").validate().is_err());
        assert!(request("A", "").validate().is_err());
    }

    #[test]
    fn test_patch_validates_present_fields_only() {
        let patch: NewsPatchRequest = serde_json::from_str(r#"{"authorId": 2}"#).unwrap();
        assert!(patch.validate().is_ok());

        let patch: NewsPatchRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_patch_empty_tag_list_clears_tags() {
        let patch: NewsPatchRequest = serde_json::from_str(r#"{"tagIds": []}"#).unwrap();
        assert_eq!(NewsPatch::from(patch).tag_ids, Some(vec![]));
    }
}
