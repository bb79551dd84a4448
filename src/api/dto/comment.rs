//! DTOs for comment endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Comment, CommentPatch, NewComment};

/// Request body for `POST /comments` and `PUT /comments/{id}`.
///
/// ```json
/// { "content": "Great article", "newsId": 7 }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    pub news_id: i64,
}

impl From<CommentRequest> for NewComment {
    fn from(request: CommentRequest) -> Self {
        NewComment {
            content: request.content,
            news_id: request.news_id,
        }
    }
}

/// Request body for `PATCH /comments/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatchRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub news_id: Option<i64>,
}

impl From<CommentPatchRequest> for CommentPatch {
    fn from(request: CommentPatchRequest) -> Self {
        CommentPatch {
            content: request.content,
            news_id: request.news_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub news_id: i64,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            news_id: comment.news_id,
        }
    }
}
