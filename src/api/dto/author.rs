//! DTOs for author endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};

/// Request body for `POST /authors` and `PUT /authors/{id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

impl From<AuthorRequest> for NewAuthor {
    fn from(request: AuthorRequest) -> Self {
        NewAuthor { name: request.name }
    }
}

/// Request body for `PATCH /authors/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatchRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[serde(default)]
    pub name: Option<String>,
}

impl From<AuthorPatchRequest> for AuthorPatch {
    fn from(request: AuthorPatchRequest) -> Self {
        AuthorPatch { name: request.name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}
