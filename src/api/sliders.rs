//! Sliders API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::slider::{CreateSlider, Slider, UpdateSlider},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List sliders with optional search/active filters
#[utoipa::path(
    get,
    path = "/sliders",
    tag = "sliders",
    params(ListQuery),
    responses(
        (status = 200, description = "Sliders list", body = [Slider])
    )
)]
pub async fn list_sliders(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Slider>>> {
    let sliders = state
        .services
        .sliders
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(sliders))
}

/// List active sliders in display order
#[utoipa::path(
    get,
    path = "/sliders/active",
    tag = "sliders",
    params(LimitQuery),
    responses(
        (status = 200, description = "Active sliders", body = [Slider])
    )
)]
pub async fn active_sliders(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Slider>>> {
    let sliders = state.services.sliders.list_active(query.limit).await?;
    Ok(Json(sliders))
}

/// Get slider by ID
#[utoipa::path(
    get,
    path = "/sliders/{id}",
    tag = "sliders",
    params(("id" = String, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider details", body = Slider)
    )
)]
pub async fn get_slider(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slider>> {
    let slider = state.services.sliders.get_by_id(parse_id(&id)).await?;
    Ok(Json(slider))
}

/// Create a slider
#[utoipa::path(
    post,
    path = "/sliders",
    tag = "sliders",
    request_body = CreateSlider,
    responses(
        (status = 201, description = "Slider created", body = CreatedResponse)
    )
)]
pub async fn create_slider(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateSlider>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let slider = state.services.sliders.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Slider created".to_string(),
            id: slider.id,
        }),
    ))
}

/// Update a slider
#[utoipa::path(
    put,
    path = "/sliders/{id}",
    tag = "sliders",
    params(("id" = String, Path, description = "Slider ID")),
    request_body = UpdateSlider,
    responses(
        (status = 200, description = "Slider updated", body = MessageResponse)
    )
)]
pub async fn update_slider(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateSlider>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.sliders.update(parse_id(&id), &data).await?;
    Ok(Json(MessageResponse::new("Slider updated")))
}

/// Delete a slider
#[utoipa::path(
    delete,
    path = "/sliders/{id}",
    tag = "sliders",
    params(("id" = String, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider deleted", body = MessageResponse)
    )
)]
pub async fn delete_slider(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.sliders.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Slider deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/sliders/{id}/toggle-active",
    tag = "sliders",
    params(("id" = String, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_slider_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state.services.sliders.toggle_active(parse_id(&id)).await?;
    let message = if active {
        "Slider activated"
    } else {
        "Slider deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}
