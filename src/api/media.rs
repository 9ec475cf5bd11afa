//! Media gallery API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::media::{CreateMediaItem, MediaItem, MediaQuery, UpdateMediaItem},
    models::LimitQuery,
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List media items with optional kind/search/active filters
#[utoipa::path(
    get,
    path = "/media",
    tag = "media",
    params(MediaQuery),
    responses(
        (status = 200, description = "Media list", body = [MediaItem])
    )
)]
pub async fn list_media(
    State(state): State<crate::AppState>,
    Query(query): Query<MediaQuery>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let media = state
        .services
        .media
        .list(
            query.media_type,
            query.search.as_deref(),
            query.active,
            query.limit,
        )
        .await?;
    Ok(Json(media))
}

/// List featured media items
#[utoipa::path(
    get,
    path = "/media/featured",
    tag = "media",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured media", body = [MediaItem])
    )
)]
pub async fn featured_media(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let media = state.services.media.featured(query.limit).await?;
    Ok(Json(media))
}

/// Get media item by ID
#[utoipa::path(
    get,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Media details", body = MediaItem)
    )
)]
pub async fn get_media(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MediaItem>> {
    let item = state.services.media.get_by_id(parse_id(&id)).await?;
    Ok(Json(item))
}

/// Create a media item
#[utoipa::path(
    post,
    path = "/media",
    tag = "media",
    request_body = CreateMediaItem,
    responses(
        (status = 201, description = "Media created", body = CreatedResponse)
    )
)]
pub async fn create_media(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMediaItem>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let item = state.services.media.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Media created".to_string(),
            id: item.id,
        }),
    ))
}

/// Update a media item
#[utoipa::path(
    put,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media ID")),
    request_body = UpdateMediaItem,
    responses(
        (status = 200, description = "Media updated", body = MessageResponse)
    )
)]
pub async fn update_media(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateMediaItem>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.media.update(parse_id(&id), &data).await?;
    Ok(Json(MessageResponse::new("Media updated")))
}

/// Delete a media item
#[utoipa::path(
    delete,
    path = "/media/{id}",
    tag = "media",
    params(("id" = String, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Media deleted", body = MessageResponse)
    )
)]
pub async fn delete_media(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.media.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Media deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/media/{id}/toggle-active",
    tag = "media",
    params(("id" = String, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_media_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state.services.media.toggle_active(parse_id(&id)).await?;
    let message = if active {
        "Media activated"
    } else {
        "Media deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Toggle the featured flag
#[utoipa::path(
    patch,
    path = "/media/{id}/toggle-featured",
    tag = "media",
    params(("id" = String, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_media_featured(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let featured = state.services.media.toggle_featured(parse_id(&id)).await?;
    let message = if featured {
        "Media featured"
    } else {
        "Media unfeatured"
    };
    Ok(Json(MessageResponse::new(message)))
}
