//! Core domain entities of the news portal.
//!
//! # Entity Types
//!
//! - [`Author`] - Writer of news
//! - [`News`] - An article owned by one author, tagged and commented
//! - [`Tag`] - A label shared by many news
//! - [`Comment`] - A reader comment attached to one news
//!
//! # Design Pattern
//!
//! Each entity has separate write models:
//! - `NewAuthor`, `NewNews`, `NewTag`, `NewComment` - full field set, used for
//!   creation and full replacement
//! - `AuthorPatch`, `NewsPatch`, `TagPatch`, `CommentPatch` - partial updates
//!   where `None` leaves a field unchanged
//!
//! Every entity also declares the fields it can be sorted by.

pub mod author;
pub mod comment;
pub mod news;
pub mod tag;

pub use author::{Author, AuthorPatch, AuthorSort, NewAuthor};
pub use comment::{Comment, CommentPatch, CommentSort, NewComment};
pub use news::{NewNews, News, NewsPatch, NewsSort};
pub use tag::{NewTag, Tag, TagPatch, TagSort};
