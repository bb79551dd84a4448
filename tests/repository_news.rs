mod common;

use news_api::domain::entities::{NewNews, NewsSort};
use news_api::domain::pagination::PageRequest;
use news_api::domain::repositories::{CommentRepository, NewsRepository, TagRepository};
use news_api::error::AppError;
use news_api::infrastructure::persistence::{
    PgCommentRepository, PgNewsRepository, PgTagRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

fn new_news(author_id: i64, tag_ids: Vec<i64>) -> NewNews {
    NewNews {
        title: "Rust 2024".to_string(),
        content: "Edition released".to_string(),
        author_id,
        tag_ids,
    }
}

#[sqlx::test]
async fn test_create_news_with_tags(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let rust = common::create_test_tag(&pool, "rust").await;
    let release = common::create_test_tag(&pool, "release").await;

    let repo = PgNewsRepository::new(Arc::new(pool));

    let created = repo
        .create(new_news(author_id, vec![rust, release]))
        .await
        .unwrap();

    let mut expected = vec![rust, release];
    expected.sort_unstable();
    assert_eq!(created.tag_ids, expected);
    assert_eq!(created.created_date, created.last_updated_date);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_create_with_missing_author_is_rejected(pool: PgPool) {
    let repo = PgNewsRepository::new(Arc::new(pool));

    let result = repo.create(new_news(999, vec![])).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_update_replaces_tags_and_refreshes_timestamp(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let old_tag = common::create_test_tag(&pool, "old").await;
    let new_tag = common::create_test_tag(&pool, "new").await;

    let repo = PgNewsRepository::new(Arc::new(pool));
    let created = repo.create(new_news(author_id, vec![old_tag])).await.unwrap();

    let mut replacement = new_news(author_id, vec![new_tag]);
    replacement.title = "Rust 2024 again".to_string();

    let updated = repo
        .update(created.id, replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Rust 2024 again");
    assert_eq!(updated.tag_ids, vec![new_tag]);
    assert_eq!(updated.created_date, created.created_date);
    assert!(updated.last_updated_date >= created.last_updated_date);
}

#[sqlx::test]
async fn test_update_missing_news_returns_none(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let repo = PgNewsRepository::new(Arc::new(pool));

    let result = repo.update(12345, new_news(author_id, vec![])).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_find_page_sorted_by_title(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    common::create_test_news(&pool, "Gamma story", author_id).await;
    common::create_test_news(&pool, "Alpha story", author_id).await;
    common::create_test_news(&pool, "Beta story", author_id).await;

    let repo = PgNewsRepository::new(Arc::new(pool));

    let page = repo
        .find_page(PageRequest::new(0, 10, NewsSort::Title).unwrap())
        .await
        .unwrap();

    let titles: Vec<_> = page.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha story", "Beta story", "Gamma story"]);
}

#[sqlx::test]
async fn test_delete_cascades_to_comments_and_tags(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let tag_id = common::create_test_tag(&pool, "rust").await;
    let news_id = common::create_test_news(&pool, "Doomed story", author_id).await;
    common::tag_news(&pool, news_id, tag_id).await;
    common::create_test_comment(&pool, "First comment", news_id).await;

    let pool = Arc::new(pool);
    let news = PgNewsRepository::new(pool.clone());
    let tags = PgTagRepository::new(pool.clone());
    let comments = PgCommentRepository::new(pool);

    assert!(news.delete(news_id).await.unwrap());

    assert!(!news.exists(news_id).await.unwrap());
    assert!(comments.find_by_news_id(news_id).await.unwrap().is_empty());
    assert!(tags.find_by_news_id(news_id).await.unwrap().is_empty());
    assert!(tags.find_by_id(tag_id).await.unwrap().is_some());
}
