//! Notices API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::notice::{CreateNotice, Notice, UpdateNotice},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List notices with optional search/active filters
#[utoipa::path(
    get,
    path = "/notices",
    tag = "notices",
    params(ListQuery),
    responses(
        (status = 200, description = "Notices list", body = [Notice])
    )
)]
pub async fn list_notices(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Notice>>> {
    let notices = state
        .services
        .notices
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(notices))
}

/// List active, unexpired notices
#[utoipa::path(
    get,
    path = "/notices/active",
    tag = "notices",
    params(LimitQuery),
    responses(
        (status = 200, description = "Active notices", body = [Notice])
    )
)]
pub async fn active_notices(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Notice>>> {
    let notices = state.services.notices.list_active(query.limit).await?;
    Ok(Json(notices))
}

/// List featured notices
#[utoipa::path(
    get,
    path = "/notices/featured",
    tag = "notices",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured notices", body = [Notice])
    )
)]
pub async fn featured_notices(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Notice>>> {
    let notices = state.services.notices.featured(query.limit).await?;
    Ok(Json(notices))
}

/// Get notice by ID
#[utoipa::path(
    get,
    path = "/notices/{id}",
    tag = "notices",
    params(("id" = String, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Notice details", body = Notice)
    )
)]
pub async fn get_notice(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Notice>> {
    let notice = state.services.notices.get_by_id(parse_id(&id)).await?;
    Ok(Json(notice))
}

/// Create a notice
#[utoipa::path(
    post,
    path = "/notices",
    tag = "notices",
    request_body = CreateNotice,
    responses(
        (status = 201, description = "Notice created", body = CreatedResponse)
    )
)]
pub async fn create_notice(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateNotice>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let notice = state.services.notices.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Notice created".to_string(),
            id: notice.id,
        }),
    ))
}

/// Update a notice
#[utoipa::path(
    put,
    path = "/notices/{id}",
    tag = "notices",
    params(("id" = String, Path, description = "Notice ID")),
    request_body = UpdateNotice,
    responses(
        (status = 200, description = "Notice updated", body = MessageResponse)
    )
)]
pub async fn update_notice(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateNotice>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.notices.update(parse_id(&id), &data).await?;
    Ok(Json(MessageResponse::new("Notice updated")))
}

/// Delete a notice
#[utoipa::path(
    delete,
    path = "/notices/{id}",
    tag = "notices",
    params(("id" = String, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Notice deleted", body = MessageResponse)
    )
)]
pub async fn delete_notice(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.notices.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Notice deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/notices/{id}/toggle-active",
    tag = "notices",
    params(("id" = String, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_notice_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state.services.notices.toggle_active(parse_id(&id)).await?;
    let message = if active {
        "Notice activated"
    } else {
        "Notice deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Toggle the featured flag
#[utoipa::path(
    patch,
    path = "/notices/{id}/toggle-featured",
    tag = "notices",
    params(("id" = String, Path, description = "Notice ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_notice_featured(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let featured = state
        .services
        .notices
        .toggle_featured(parse_id(&id))
        .await?;
    let message = if featured {
        "Notice featured"
    } else {
        "Notice unfeatured"
    };
    Ok(Json(MessageResponse::new(message)))
}
