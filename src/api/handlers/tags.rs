//! Handlers for tag endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{ListParams, TagPatchRequest, TagRequest, TagResponse};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::links::{Link, LinkBuilder, Linked, LinkedCollection, Resource};
use crate::domain::entities::{Tag, TagSort};
use crate::domain::pagination::SortField;
use crate::error::AppError;
use crate::state::AppState;

fn linked(links: &LinkBuilder, tag: Tag) -> Linked<TagResponse> {
    let self_links = links.self_links(Resource::Tags, tag.id);
    Linked::new(tag.into(), self_links)
}

/// `GET /tags?page&size&sortedBy`
pub async fn tag_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<LinkedCollection<TagResponse>>, AppError> {
    let request = params.to_page_request::<TagSort>()?;
    let page = state.tag_service.get_all(request).await?;

    let links = &state.links;
    let collection_links = links.page_links(Resource::Tags, &page, request.sort().name());

    Ok(Json(LinkedCollection::paged(
        page.map(TagResponse::from),
        |tag| links.self_links(Resource::Tags, tag.id),
        collection_links,
    )))
}

/// `GET /tags/{id}`
pub async fn tag_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Linked<TagResponse>>, AppError> {
    let tag = state.tag_service.get_by_id(id).await?;

    Ok(Json(linked(&state.links, tag)))
}

/// Lists the tags of a news.
///
/// # Endpoint
///
/// `GET /tags/news/{newsId}`
///
/// An unknown or deleted news yields an empty collection, not 404.
pub async fn tags_by_news_handler(
    State(state): State<AppState>,
    ApiPath(news_id): ApiPath<i64>,
) -> Result<Json<LinkedCollection<TagResponse>>, AppError> {
    let tags = state.tag_service.get_by_news_id(news_id).await?;

    let links = &state.links;
    let self_link = Link::self_link(links.by_news(Resource::Tags, news_id));

    Ok(Json(LinkedCollection::new(
        tags.into_iter().map(TagResponse::from).collect(),
        |tag| links.self_links(Resource::Tags, tag.id),
        vec![self_link],
    )))
}

/// Creates a tag.
///
/// # Endpoint
///
/// `POST /tags`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed.
/// Returns 409 Conflict if a tag with the same name exists.
pub async fn create_tag_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> Result<(StatusCode, Json<Linked<TagResponse>>), AppError> {
    let tag = state.tag_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(linked(&state.links, tag))))
}

/// `PUT /tags/{id}`
pub async fn update_tag_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<TagRequest>,
) -> Result<Json<Linked<TagResponse>>, AppError> {
    let tag = state.tag_service.update_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, tag)))
}

/// `PATCH /tags/{id}`
pub async fn patch_tag_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<TagPatchRequest>,
) -> Result<Json<Linked<TagResponse>>, AppError> {
    let tag = state.tag_service.patch_by_id(id, payload.into()).await?;

    Ok(Json(linked(&state.links, tag)))
}

/// `DELETE /tags/{id}`; detaches the tag from every news.
pub async fn delete_tag_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.tag_service.remove_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
