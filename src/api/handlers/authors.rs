//! Handlers for author endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::{AuthorPatchRequest, AuthorRequest, AuthorResponse, ListParams};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::links::{Link, LinkBuilder, Linked, LinkedCollection, Resource};
use crate::domain::entities::{Author, AuthorSort};
use crate::domain::pagination::SortField;
use crate::error::AppError;
use crate::state::AppState;

fn linked(links: &LinkBuilder, author: Author) -> Linked<AuthorResponse> {
    let self_links = links.self_links(Resource::Authors, author.id);
    Linked::new(author.into(), self_links)
}

/// Lists authors page by page.
///
/// # Endpoint
///
/// `GET /authors?page=0&size=10&sortedBy=name`
///
/// # Query Parameters
///
/// - `page` - zero-based page index (default 0)
/// - `size` - page size, at least 1 (default 10)
/// - `sortedBy` - `id` or `name` (default `id`)
///
/// # Errors
///
/// Returns 400 Bad Request for a negative page, a zero size or an unknown
/// sort field.
pub async fn author_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<LinkedCollection<AuthorResponse>>, AppError> {
    let request = params.to_page_request::<AuthorSort>()?;
    let page = state.author_service.get_all(request).await?;

    let links = &state.links;
    let collection_links = links.page_links(Resource::Authors, &page, request.sort().name());

    Ok(Json(LinkedCollection::paged(
        page.map(AuthorResponse::from),
        |author| links.self_links(Resource::Authors, author.id),
        collection_links,
    )))
}

/// Returns one author.
///
/// # Endpoint
///
/// `GET /authors/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the author does not exist.
pub async fn author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Linked<AuthorResponse>>, AppError> {
    let author = state.author_service.get_by_id(id).await?;

    Ok(Json(linked(&state.links, author)))
}

/// Returns the author of a news.
///
/// # Endpoint
///
/// `GET /authors/news/{newsId}`
///
/// The self link is the relation URI itself, not `/authors/{id}`.
///
/// # Errors
///
/// Returns 404 Not Found if the news does not exist.
pub async fn author_by_news_handler(
    State(state): State<AppState>,
    ApiPath(news_id): ApiPath<i64>,
) -> Result<Json<Linked<AuthorResponse>>, AppError> {
    let author = state.author_service.get_by_news_id(news_id).await?;
    let self_link = Link::self_link(state.links.by_news(Resource::Authors, news_id));

    Ok(Json(Linked::new(author.into(), vec![self_link])))
}

/// Creates an author.
///
/// # Endpoint
///
/// `POST /authors`
///
/// # Request Body
///
/// ```json
/// { "name": "Orwell" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_author_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> Result<(StatusCode, Json<Linked<AuthorResponse>>), AppError> {
    payload.validate()?;

    let author = state.author_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(linked(&state.links, author))))
}

/// Replaces an author.
///
/// # Endpoint
///
/// `PUT /authors/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the author does not exist.
pub async fn update_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AuthorRequest>,
) -> Result<Json<Linked<AuthorResponse>>, AppError> {
    payload.validate()?;

    let author = state.author_service.update_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, author)))
}

/// Partially updates an author.
///
/// # Endpoint
///
/// `PATCH /authors/{id}`
///
/// Absent or `null` fields are left unchanged.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the author does not exist.
pub async fn patch_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AuthorPatchRequest>,
) -> Result<Json<Linked<AuthorResponse>>, AppError> {
    payload.validate()?;

    let author = state.author_service.patch_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, author)))
}

/// Deletes an author.
///
/// # Endpoint
///
/// `DELETE /authors/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the author still has news.
/// Returns 404 Not Found if the author does not exist.
pub async fn delete_author_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.author_service.remove_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
