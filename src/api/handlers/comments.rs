//! Handlers for comment endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::{CommentPatchRequest, CommentRequest, CommentResponse, ListParams};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::links::{Link, LinkBuilder, Linked, LinkedCollection, Resource};
use crate::domain::entities::{Comment, CommentSort};
use crate::domain::pagination::SortField;
use crate::error::AppError;
use crate::state::AppState;

fn linked(links: &LinkBuilder, comment: Comment) -> Linked<CommentResponse> {
    let self_links = links.self_links(Resource::Comments, comment.id);
    Linked::new(comment.into(), self_links)
}

/// `GET /comments?page&size&sortedBy`
pub async fn comment_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<LinkedCollection<CommentResponse>>, AppError> {
    let request = params.to_page_request::<CommentSort>()?;
    let page = state.comment_service.get_all(request).await?;

    let links = &state.links;
    let collection_links = links.page_links(Resource::Comments, &page, request.sort().name());

    Ok(Json(LinkedCollection::paged(
        page.map(CommentResponse::from),
        |comment| links.self_links(Resource::Comments, comment.id),
        collection_links,
    )))
}

/// `GET /comments/{id}`
pub async fn comment_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Linked<CommentResponse>>, AppError> {
    let comment = state.comment_service.get_by_id(id).await?;

    Ok(Json(linked(&state.links, comment)))
}

/// `GET /comments/news/{newsId}`; empty for an unknown news.
pub async fn comments_by_news_handler(
    State(state): State<AppState>,
    ApiPath(news_id): ApiPath<i64>,
) -> Result<Json<LinkedCollection<CommentResponse>>, AppError> {
    let comments = state.comment_service.get_by_news_id(news_id).await?;

    let links = &state.links;
    let self_link = Link::self_link(links.by_news(Resource::Comments, news_id));

    Ok(Json(LinkedCollection::new(
        comments.into_iter().map(CommentResponse::from).collect(),
        |comment| links.self_links(Resource::Comments, comment.id),
        vec![self_link],
    )))
}

/// Creates a comment on a news.
///
/// # Endpoint
///
/// `POST /comments`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the news does not exist.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CommentRequest>,
) -> Result<(StatusCode, Json<Linked<CommentResponse>>), AppError> {
    payload.validate()?;

    let comment = state.comment_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(linked(&state.links, comment))))
}

/// `PUT /comments/{id}`
pub async fn update_comment_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CommentRequest>,
) -> Result<Json<Linked<CommentResponse>>, AppError> {
    payload.validate()?;

    let comment = state
        .comment_service
        .update_by_id(id, payload.into())
        .await?;

    Ok(Json(linked(&state.links, comment)))
}

/// `PATCH /comments/{id}`
pub async fn patch_comment_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CommentPatchRequest>,
) -> Result<Json<Linked<CommentResponse>>, AppError> {
    payload.validate()?;

    let comment = state.comment_service.patch_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, comment)))
}

/// `DELETE /comments/{id}`
pub async fn delete_comment_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.comment_service.remove_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
