//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource collection. Handlers parse
//! and validate the request, call the matching service and wrap the result
//! with its links.

pub mod authors;
pub mod comments;
pub mod health;
pub mod news;
pub mod tags;

pub use authors::{
    author_by_news_handler, author_handler, author_list_handler, create_author_handler,
    delete_author_handler, patch_author_handler, update_author_handler,
};
pub use comments::{
    comment_handler, comment_list_handler, comments_by_news_handler, create_comment_handler,
    delete_comment_handler, patch_comment_handler, update_comment_handler,
};
pub use health::health_handler;
pub use news::{
    create_news_handler, delete_news_handler, news_handler, news_list_handler,
    patch_news_handler, update_news_handler,
};
pub use tags::{
    create_tag_handler, delete_tag_handler, patch_tag_handler, tag_handler, tag_list_handler,
    tags_by_news_handler, update_tag_handler,
};
