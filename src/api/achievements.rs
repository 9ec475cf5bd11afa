//! Achievements API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::achievement::{Achievement, CreateAchievement, UpdateAchievement},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List achievements with optional search/active filters
#[utoipa::path(
    get,
    path = "/achievements",
    tag = "achievements",
    params(ListQuery),
    responses(
        (status = 200, description = "Achievements list", body = [Achievement])
    )
)]
pub async fn list_achievements(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Achievement>>> {
    let achievements = state
        .services
        .achievements
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(achievements))
}

/// List active achievements in display order
#[utoipa::path(
    get,
    path = "/achievements/active",
    tag = "achievements",
    params(LimitQuery),
    responses(
        (status = 200, description = "Active achievements", body = [Achievement])
    )
)]
pub async fn active_achievements(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Achievement>>> {
    let achievements = state.services.achievements.list_active(query.limit).await?;
    Ok(Json(achievements))
}

/// Get achievement by ID
#[utoipa::path(
    get,
    path = "/achievements/{id}",
    tag = "achievements",
    params(("id" = String, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Achievement details", body = Achievement)
    )
)]
pub async fn get_achievement(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Achievement>> {
    let achievement = state.services.achievements.get_by_id(parse_id(&id)).await?;
    Ok(Json(achievement))
}

/// Create an achievement
#[utoipa::path(
    post,
    path = "/achievements",
    tag = "achievements",
    request_body = CreateAchievement,
    responses(
        (status = 201, description = "Achievement created", body = CreatedResponse)
    )
)]
pub async fn create_achievement(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAchievement>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let achievement = state.services.achievements.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Achievement created".to_string(),
            id: achievement.id,
        }),
    ))
}

/// Update an achievement
#[utoipa::path(
    put,
    path = "/achievements/{id}",
    tag = "achievements",
    params(("id" = String, Path, description = "Achievement ID")),
    request_body = UpdateAchievement,
    responses(
        (status = 200, description = "Achievement updated", body = MessageResponse)
    )
)]
pub async fn update_achievement(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateAchievement>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state
        .services
        .achievements
        .update(parse_id(&id), &data)
        .await?;
    Ok(Json(MessageResponse::new("Achievement updated")))
}

/// Delete an achievement
#[utoipa::path(
    delete,
    path = "/achievements/{id}",
    tag = "achievements",
    params(("id" = String, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Achievement deleted", body = MessageResponse)
    )
)]
pub async fn delete_achievement(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.achievements.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Achievement deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/achievements/{id}/toggle-active",
    tag = "achievements",
    params(("id" = String, Path, description = "Achievement ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_achievement_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state
        .services
        .achievements
        .toggle_active(parse_id(&id))
        .await?;
    let message = if active {
        "Achievement activated"
    } else {
        "Achievement deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}
