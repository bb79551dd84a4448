mod common;

use news_api::domain::entities::NewTag;
use news_api::domain::repositories::{NewsRepository, TagRepository};
use news_api::error::AppError;
use news_api::infrastructure::persistence::{PgNewsRepository, PgTagRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_duplicate_name_is_conflict(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));

    repo.create(NewTag {
        name: "rust".to_string(),
    })
    .await
    .unwrap();

    let result = repo
        .create(NewTag {
            name: "rust".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_by_news_id(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let news_id = common::create_test_news(&pool, "Tagged story", author_id).await;
    let rust = common::create_test_tag(&pool, "rust").await;
    common::create_test_tag(&pool, "unused").await;
    common::tag_news(&pool, news_id, rust).await;

    let repo = PgTagRepository::new(Arc::new(pool));

    let tags = repo.find_by_news_id(news_id).await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "rust");
}

#[sqlx::test]
async fn test_find_missing_ids(pool: PgPool) {
    let existing = common::create_test_tag(&pool, "rust").await;
    let repo = PgTagRepository::new(Arc::new(pool));

    let missing = repo
        .find_missing_ids(vec![existing, existing + 100, existing + 200])
        .await
        .unwrap();

    assert_eq!(missing, vec![existing + 100, existing + 200]);
}

#[sqlx::test]
async fn test_delete_detaches_from_news(pool: PgPool) {
    let author_id = common::create_test_author(&pool, "Writer").await;
    let news_id = common::create_test_news(&pool, "Tagged story", author_id).await;
    let tag_id = common::create_test_tag(&pool, "rust").await;
    common::tag_news(&pool, news_id, tag_id).await;

    let pool = Arc::new(pool);
    let tags = PgTagRepository::new(pool.clone());
    let news = PgNewsRepository::new(pool);

    assert!(tags.delete(tag_id).await.unwrap());

    let story = news.find_by_id(news_id).await.unwrap().unwrap();
    assert!(story.tag_ids.is_empty());
}
