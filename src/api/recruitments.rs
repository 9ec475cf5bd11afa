//! Recruitments API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::recruitment::{CreateRecruitment, Recruitment, UpdateRecruitment},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List recruitments with optional search/active filters
#[utoipa::path(
    get,
    path = "/recruitments",
    tag = "recruitments",
    params(ListQuery),
    responses(
        (status = 200, description = "Recruitments list", body = [Recruitment])
    )
)]
pub async fn list_recruitments(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Recruitment>>> {
    let recruitments = state
        .services
        .recruitments
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(recruitments))
}

/// List active, unexpired recruitment announcements
#[utoipa::path(
    get,
    path = "/recruitments/active",
    tag = "recruitments",
    params(LimitQuery),
    responses(
        (status = 200, description = "Active recruitments", body = [Recruitment])
    )
)]
pub async fn active_recruitments(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Recruitment>>> {
    let recruitments = state.services.recruitments.list_active(query.limit).await?;
    Ok(Json(recruitments))
}

/// Get recruitment by ID
#[utoipa::path(
    get,
    path = "/recruitments/{id}",
    tag = "recruitments",
    params(("id" = String, Path, description = "Recruitment ID")),
    responses(
        (status = 200, description = "Recruitment details", body = Recruitment)
    )
)]
pub async fn get_recruitment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Recruitment>> {
    let recruitment = state.services.recruitments.get_by_id(parse_id(&id)).await?;
    Ok(Json(recruitment))
}

/// Create a recruitment announcement
#[utoipa::path(
    post,
    path = "/recruitments",
    tag = "recruitments",
    request_body = CreateRecruitment,
    responses(
        (status = 201, description = "Recruitment created", body = CreatedResponse)
    )
)]
pub async fn create_recruitment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRecruitment>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let recruitment = state.services.recruitments.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Recruitment created".to_string(),
            id: recruitment.id,
        }),
    ))
}

/// Update a recruitment announcement
#[utoipa::path(
    put,
    path = "/recruitments/{id}",
    tag = "recruitments",
    params(("id" = String, Path, description = "Recruitment ID")),
    request_body = UpdateRecruitment,
    responses(
        (status = 200, description = "Recruitment updated", body = MessageResponse)
    )
)]
pub async fn update_recruitment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateRecruitment>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state
        .services
        .recruitments
        .update(parse_id(&id), &data)
        .await?;
    Ok(Json(MessageResponse::new("Recruitment updated")))
}

/// Delete a recruitment announcement
#[utoipa::path(
    delete,
    path = "/recruitments/{id}",
    tag = "recruitments",
    params(("id" = String, Path, description = "Recruitment ID")),
    responses(
        (status = 200, description = "Recruitment deleted", body = MessageResponse)
    )
)]
pub async fn delete_recruitment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.recruitments.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Recruitment deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/recruitments/{id}/toggle-active",
    tag = "recruitments",
    params(("id" = String, Path, description = "Recruitment ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_recruitment_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state
        .services
        .recruitments
        .toggle_active(parse_id(&id))
        .await?;
    let message = if active {
        "Recruitment activated"
    } else {
        "Recruitment deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}
