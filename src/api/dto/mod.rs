//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. JSON field names are camelCase.
//!
//! Each entity has three shapes:
//! - `*Request` - full field set for `POST` and `PUT`
//! - `*PatchRequest` - every field optional for `PATCH`; absent or `null`
//!   leaves the stored value unchanged
//! - `*Response` - the immutable representation returned to clients

pub mod author;
pub mod comment;
pub mod health;
pub mod news;
pub mod pagination;
pub mod tag;

pub use author::{AuthorPatchRequest, AuthorRequest, AuthorResponse};
pub use comment::{CommentPatchRequest, CommentRequest, CommentResponse};
pub use news::{NewsPatchRequest, NewsRequest, NewsResponse};
pub use pagination::ListParams;
pub use tag::{TagPatchRequest, TagRequest, TagResponse};
