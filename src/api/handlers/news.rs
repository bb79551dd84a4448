//! Handlers for news endpoints.
//!
//! Every news representation carries four links:
//!
//! ```json
//! [
//!   { "rel": "self",     "href": "/news/7" },
//!   { "rel": "author",   "href": "/authors/news/7" },
//!   { "rel": "tags",     "href": "/tags/news/7" },
//!   { "rel": "comments", "href": "/comments/news/7" }
//! ]
//! ```

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::{ListParams, NewsPatchRequest, NewsRequest, NewsResponse};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::links::{LinkBuilder, Linked, LinkedCollection, Resource};
use crate::domain::entities::{News, NewsSort};
use crate::domain::pagination::SortField;
use crate::error::AppError;
use crate::state::AppState;

fn linked(links: &LinkBuilder, news: News) -> Linked<NewsResponse> {
    let news_links = links.news_links(news.id);
    Linked::new(news.into(), news_links)
}

/// Lists news page by page.
///
/// # Endpoint
///
/// `GET /news?page=0&size=10&sortedBy=createdDate`
///
/// `sortedBy` accepts `id`, `title`, `content`, `authorId`, `createdDate` and
/// `lastUpdatedDate`.
///
/// # Errors
///
/// Returns 400 Bad Request for invalid paging or an unknown sort field.
pub async fn news_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<LinkedCollection<NewsResponse>>, AppError> {
    let request = params.to_page_request::<NewsSort>()?;
    let page = state.news_service.get_all(request).await?;

    let links = &state.links;
    let collection_links = links.page_links(Resource::News, &page, request.sort().name());

    Ok(Json(LinkedCollection::paged(
        page.map(NewsResponse::from),
        |news| links.news_links(news.id),
        collection_links,
    )))
}

/// Returns one news.
///
/// # Endpoint
///
/// `GET /news/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the news does not exist.
pub async fn news_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Linked<NewsResponse>>, AppError> {
    let news = state.news_service.get_by_id(id).await?;

    Ok(Json(linked(&state.links, news)))
}

/// Creates a news.
///
/// # Endpoint
///
/// `POST /news`
///
/// # Request Body
///
/// ```json
/// { "title": "Rust 2024", "content": "Edition released", "authorId": 1, "tagIds": [2] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the author or a tag does not exist.
pub async fn create_news_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewsRequest>,
) -> Result<(StatusCode, Json<Linked<NewsResponse>>), AppError> {
    payload.validate()?;

    let news = state.news_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(linked(&state.links, news))))
}

/// Replaces a news, including its tag set.
///
/// # Endpoint
///
/// `PUT /news/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the news, the author or a tag does not exist.
pub async fn update_news_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewsRequest>,
) -> Result<Json<Linked<NewsResponse>>, AppError> {
    payload.validate()?;

    let news = state.news_service.update_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, news)))
}

/// Partially updates a news.
///
/// # Endpoint
///
/// `PATCH /news/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the news, or a newly referenced author or tag,
/// does not exist.
pub async fn patch_news_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewsPatchRequest>,
) -> Result<Json<Linked<NewsResponse>>, AppError> {
    payload.validate()?;

    let news = state.news_service.patch_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, news)))
}

/// Deletes a news with its comments and tag associations.
///
/// # Endpoint
///
/// `DELETE /news/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the news does not exist.
pub async fn delete_news_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.news_service.remove_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
