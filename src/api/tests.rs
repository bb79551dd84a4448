use axum::{Router, body::Bytes, http::StatusCode, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::handlers::health_handler;
use crate::api::links::LinkBuilder;
use crate::api::routes::resource_routes;
use crate::domain::entities::{Author, Comment, News, Tag};
use crate::domain::repositories::{
    MockAuthorRepository, MockCommentRepository, MockHealthRepository, MockNewsRepository,
    MockTagRepository,
};
use crate::error::AppError;
use crate::state::{AppState, Repositories};

#[derive(Default)]
struct Mocks {
    authors: MockAuthorRepository,
    news: MockNewsRepository,
    tags: MockTagRepository,
    comments: MockCommentRepository,
    health: MockHealthRepository,
}

impl Mocks {
    fn server(self) -> TestServer {
        let state = AppState::new(
            Repositories {
                authors: Arc::new(self.authors),
                news: Arc::new(self.news),
                tags: Arc::new(self.tags),
                comments: Arc::new(self.comments),
                health: Arc::new(self.health),
            },
            LinkBuilder::default(),
        );

        let app = Router::new()
            .merge(resource_routes())
            .route("/health", get(health_handler))
            .with_state(state);

        TestServer::new(app).unwrap()
    }
}

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn news(id: i64, title: &str) -> News {
    News {
        id,
        title: title.to_string(),
        content: "Some content".to_string(),
        author_id: 1,
        tag_ids: vec![],
        created_date: timestamp(),
        last_updated_date: timestamp(),
    }
}

fn href<'a>(links: &'a Value, rel: &str) -> Option<&'a str> {
    links
        .as_array()?
        .iter()
        .find(|link| link["rel"] == rel)
        .and_then(|link| link["href"].as_str())
}

#[tokio::test]
async fn test_create_news_returns_related_links() {
    let mut mocks = Mocks::default();
    mocks
        .authors
        .expect_find_by_id()
        .returning(|id| Ok(Some(Author::new(id, "Writer".to_string()))));
    mocks.news.expect_create().times(1).returning(|new| {
        Ok(News {
            id: 7,
            title: new.title,
            content: new.content,
            author_id: new.author_id,
            tag_ids: new.tag_ids,
            created_date: timestamp(),
            last_updated_date: timestamp(),
        })
    });

    let response = mocks
        .server()
        .post("/news")
        .json(&json!({ "title": "A", "content": "B", "authorId": 1 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "A");
    assert_eq!(body["content"], "B");
    assert_eq!(body["authorId"], 1);
    assert_eq!(body["tagIds"], json!([]));
    assert_eq!(href(&body["links"], "self"), Some("/news/7"));
    assert_eq!(href(&body["links"], "author"), Some("/authors/news/7"));
    assert_eq!(href(&body["links"], "tags"), Some("/tags/news/7"));
    assert_eq!(href(&body["links"], "comments"), Some("/comments/news/7"));
}

#[tokio::test]
async fn test_create_news_with_unknown_author_is_not_found() {
    let mut mocks = Mocks::default();
    mocks.authors.expect_find_by_id().returning(|_| Ok(None));
    mocks.news.expect_create().times(0);

    let response = mocks
        .server()
        .post("/news")
        .json(&json!({ "title": "Aaaaa", "content": "Bbbbb", "authorId": 42 }))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_news_list_page_and_links() {
    let mut mocks = Mocks::default();
    mocks
        .news
        .expect_find_page()
        .withf(|request| request.page() == 0 && request.size() == 2)
        .times(1)
        .returning(|_| Ok(vec![news(2, "Alpha news"), news(1, "Beta news")]));
    mocks.news.expect_count().times(1).returning(|| Ok(3));

    let response = mocks
        .server()
        .get("/news?page=0&size=2&sortedBy=title")
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["content"][0]["title"], "Alpha news");
    assert_eq!(href(&body["content"][0]["links"], "self"), Some("/news/2"));
    assert_eq!(
        body["page"],
        json!({ "number": 0, "size": 2, "totalElements": 3, "totalPages": 2 })
    );
    assert_eq!(href(&body["links"], "self"), Some("/news"));
    assert_eq!(
        href(&body["links"], "page"),
        Some("/news?page=0&size=2&sortedBy=title")
    );
    assert_eq!(
        href(&body["links"], "next"),
        Some("/news?page=1&size=2&sortedBy=title")
    );
    assert_eq!(href(&body["links"], "prev"), None);
}

#[tokio::test]
async fn test_list_defaults() {
    let mut mocks = Mocks::default();
    mocks
        .tags
        .expect_find_page()
        .withf(|request| request.page() == 0 && request.size() == 10)
        .times(1)
        .returning(|_| Ok(vec![]));
    mocks.tags.expect_count().times(1).returning(|| Ok(0));

    let response = mocks.server().get("/tags").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(
        href(&body["links"], "page"),
        Some("/tags?page=0&size=10&sortedBy=id")
    );
    assert_eq!(body["content"], json!([]));
}

#[tokio::test]
async fn test_unknown_sort_field_is_rejected() {
    let mut mocks = Mocks::default();
    mocks.authors.expect_find_page().times(0);

    let response = mocks.server().get("/authors?sortedBy=password").await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["details"]["allowed"], json!(["id", "name"]));
}

#[tokio::test]
async fn test_negative_page_and_zero_size_are_rejected() {
    let server = Mocks::default().server();

    server
        .get("/comments?page=-1")
        .await
        .assert_status_bad_request();
    server
        .get("/comments?size=0")
        .await
        .assert_status_bad_request();
    server
        .get("/comments?page=abc")
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_get_missing_tag_is_not_found() {
    let mut mocks = Mocks::default();
    mocks.tags.expect_find_by_id().returning(|_| Ok(None));

    let response = mocks.server().get("/tags/99").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "Tag not found");
    assert_eq!(body["error"]["details"]["id"], 99);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let response = Mocks::default().server().get("/news/abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_tags_by_missing_news_is_empty() {
    let mut mocks = Mocks::default();
    mocks
        .tags
        .expect_find_by_news_id()
        .times(1)
        .returning(|_| Ok(vec![]));

    let response = mocks.server().get("/tags/news/5").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["content"], json!([]));
    assert!(body.get("page").is_none());
    assert_eq!(href(&body["links"], "self"), Some("/tags/news/5"));
}

#[tokio::test]
async fn test_comments_by_news_link_each_comment() {
    let mut mocks = Mocks::default();
    mocks.comments.expect_find_by_news_id().returning(|news_id| {
        Ok(vec![
            Comment::new(1, "First!".to_string(), news_id),
            Comment::new(2, "Second".to_string(), news_id),
        ])
    });

    let response = mocks.server().get("/comments/news/7").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["content"][1]["newsId"], 7);
    assert_eq!(href(&body["content"][1]["links"], "self"), Some("/comments/2"));
    assert_eq!(href(&body["links"], "self"), Some("/comments/news/7"));
}

#[tokio::test]
async fn test_author_by_news_uses_relation_self_link() {
    let mut mocks = Mocks::default();
    mocks
        .authors
        .expect_find_by_news_id()
        .returning(|_| Ok(Some(Author::new(3, "Writer".to_string()))));

    let response = mocks.server().get("/authors/news/7").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], 3);
    assert_eq!(href(&body["links"], "self"), Some("/authors/news/7"));
}

#[tokio::test]
async fn test_author_by_missing_news_is_not_found() {
    let mut mocks = Mocks::default();
    mocks.authors.expect_find_by_news_id().returning(|_| Ok(None));

    mocks
        .server()
        .get("/authors/news/7")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_create_author_validation() {
    let mut mocks = Mocks::default();
    mocks.authors.expect_create().times(0);
    let server = mocks.server();

    let response = server.post("/authors").json(&json!({ "name": "" })).await;
    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"]["details"]["name"].is_array());

    server
        .post("/authors")
        .json(&json!({}))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = Mocks::default()
        .server()
        .post("/tags")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_duplicate_tag_is_conflict() {
    let mut mocks = Mocks::default();
    mocks.tags.expect_create().returning(|_| {
        Err(AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": "tags_name_key" }),
        ))
    });

    let response = mocks
        .server()
        .post("/tags")
        .json(&json!({ "name": "rust" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_tag_accepts_short_name() {
    let mut mocks = Mocks::default();
    mocks
        .tags
        .expect_create()
        .times(1)
        .returning(|tag| Ok(Tag::new(3, tag.name)));

    let response = mocks
        .server()
        .post("/tags")
        .json(&json!({ "name": "c" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "c");
    assert_eq!(href(&body["links"], "self"), Some("/tags/3"));
}

#[tokio::test]
async fn test_put_replaces_tag() {
    let mut mocks = Mocks::default();
    mocks
        .tags
        .expect_update()
        .withf(|id, tag| *id == 4 && tag.name == "systems")
        .returning(|id, tag| Ok(Some(Tag::new(id, tag.name))));

    let response = mocks
        .server()
        .put("/tags/4")
        .json(&json!({ "name": "systems" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "systems");
    assert_eq!(href(&body["links"], "self"), Some("/tags/4"));
}

#[tokio::test]
async fn test_patch_comment_with_null_keeps_content() {
    let mut mocks = Mocks::default();
    mocks
        .comments
        .expect_find_by_id()
        .returning(|id| Ok(Some(Comment::new(id, "Original".to_string(), 7))));
    mocks
        .comments
        .expect_update()
        .withf(|_, comment| comment.content == "Original" && comment.news_id == 7)
        .times(1)
        .returning(|id, comment| Ok(Some(Comment::new(id, comment.content, comment.news_id))));
    mocks.news.expect_exists().times(0);

    let response = mocks
        .server()
        .patch("/comments/3")
        .json(&json!({ "content": null }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["content"], "Original");
}

#[tokio::test]
async fn test_patch_missing_news_is_not_found() {
    let mut mocks = Mocks::default();
    mocks.news.expect_find_by_id().returning(|_| Ok(None));

    mocks
        .server()
        .patch("/news/9")
        .json(&json!({ "title": "Updated title" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_news_returns_no_content() {
    let mut mocks = Mocks::default();
    mocks.news.expect_delete().times(1).returning(|_| Ok(true));

    let response = mocks.server().delete("/news/7").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_author_with_news_is_rejected() {
    let mut mocks = Mocks::default();
    mocks
        .authors
        .expect_find_by_id()
        .returning(|id| Ok(Some(Author::new(id, "Writer".to_string()))));
    mocks.authors.expect_count_news().returning(|_| Ok(2));
    mocks.authors.expect_delete().times(0);

    let response = mocks.server().delete("/authors/1").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["details"]["newsCount"], 2);
}

#[tokio::test]
async fn test_health_ok() {
    let mut mocks = Mocks::default();
    mocks.health.expect_ping().returning(|| Ok(()));

    let response = mocks.server().get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded() {
    let mut mocks = Mocks::default();
    mocks
        .health
        .expect_ping()
        .returning(|| Err(AppError::internal("Database error", json!({}))));

    let response = mocks.server().get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "degraded");
}
