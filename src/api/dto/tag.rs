//! DTOs for tag endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewTag, Tag, TagPatch};

/// Request body for `POST /tags` and `PUT /tags/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub name: String,
}

impl From<TagRequest> for NewTag {
    fn from(request: TagRequest) -> Self {
        NewTag { name: request.name }
    }
}

/// Request body for `PATCH /tags/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPatchRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<TagPatchRequest> for TagPatch {
    fn from(request: TagPatchRequest) -> Self {
        TagPatch { name: request.name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}
