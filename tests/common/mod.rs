#![allow(dead_code)]

use news_api::api::links::LinkBuilder;
use news_api::state::{AppState, Repositories};
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_author(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO authors (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_tag(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tags (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_news(pool: &PgPool, title: &str, author_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO news (title, content, author_id) VALUES ($1, 'Test content', $2) RETURNING id",
    )
    .bind(title)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn tag_news(pool: &PgPool, news_id: i64, tag_id: i64) {
    sqlx::query("INSERT INTO news_tags (news_id, tag_id) VALUES ($1, $2)")
        .bind(news_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_comment(pool: &PgPool, content: &str, news_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO comments (content, news_id) VALUES ($1, $2) RETURNING id")
        .bind(content)
        .bind(news_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Repositories::postgres(Arc::new(pool)),
        LinkBuilder::default(),
    )
}
