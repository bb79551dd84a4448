//! API route configuration.

use crate::api::handlers::{
    author_by_news_handler, author_handler, author_list_handler, comment_handler,
    comment_list_handler, comments_by_news_handler, create_author_handler,
    create_comment_handler, create_news_handler, create_tag_handler, delete_author_handler,
    delete_comment_handler, delete_news_handler, delete_tag_handler, news_handler,
    news_list_handler, patch_author_handler, patch_comment_handler, patch_news_handler,
    patch_tag_handler, tag_handler, tag_list_handler, tags_by_news_handler,
    update_author_handler, update_comment_handler, update_news_handler, update_tag_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All resource routes.
///
/// # Endpoints
///
/// For each `R` in `authors`, `news`, `tags`, `comments`:
///
/// - `GET    /R`              - Paginated, sorted list
/// - `POST   /R`              - Create
/// - `GET    /R/{id}`         - Fetch one
/// - `PUT    /R/{id}`         - Replace
/// - `PATCH  /R/{id}`         - Partial update
/// - `DELETE /R/{id}`         - Delete
///
/// Relations of a news:
///
/// - `GET    /authors/news/{id}`  - Its author
/// - `GET    /tags/news/{id}`     - Its tags
/// - `GET    /comments/news/{id}` - Its comments
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/authors",
            get(author_list_handler).post(create_author_handler),
        )
        .route(
            "/authors/{id}",
            get(author_handler)
                .put(update_author_handler)
                .patch(patch_author_handler)
                .delete(delete_author_handler),
        )
        .route("/authors/news/{id}", get(author_by_news_handler))
        .route("/news", get(news_list_handler).post(create_news_handler))
        .route(
            "/news/{id}",
            get(news_handler)
                .put(update_news_handler)
                .patch(patch_news_handler)
                .delete(delete_news_handler),
        )
        .route("/tags", get(tag_list_handler).post(create_tag_handler))
        .route(
            "/tags/{id}",
            get(tag_handler)
                .put(update_tag_handler)
                .patch(patch_tag_handler)
                .delete(delete_tag_handler),
        )
        .route("/tags/news/{id}", get(tags_by_news_handler))
        .route(
            "/comments",
            get(comment_list_handler).post(create_comment_handler),
        )
        .route(
            "/comments/{id}",
            get(comment_handler)
                .put(update_comment_handler)
                .patch(patch_comment_handler)
                .delete(delete_comment_handler),
        )
        .route("/comments/news/{id}", get(comments_by_news_handler))
}
