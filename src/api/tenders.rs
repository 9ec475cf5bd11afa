//! Tenders API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::tender::{CreateTender, Tender, UpdateTender},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List tenders with optional search/active filters
#[utoipa::path(
    get,
    path = "/tenders",
    tag = "tenders",
    params(ListQuery),
    responses(
        (status = 200, description = "Tenders list", body = [Tender])
    )
)]
pub async fn list_tenders(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Tender>>> {
    let tenders = state
        .services
        .tenders
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(tenders))
}

/// List active tenders that are still open for bids
#[utoipa::path(
    get,
    path = "/tenders/active",
    tag = "tenders",
    params(LimitQuery),
    responses(
        (status = 200, description = "Open tenders", body = [Tender])
    )
)]
pub async fn active_tenders(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Tender>>> {
    let tenders = state.services.tenders.list_active(query.limit).await?;
    Ok(Json(tenders))
}

/// List featured tenders
#[utoipa::path(
    get,
    path = "/tenders/featured",
    tag = "tenders",
    params(LimitQuery),
    responses(
        (status = 200, description = "Featured tenders", body = [Tender])
    )
)]
pub async fn featured_tenders(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<Tender>>> {
    let tenders = state.services.tenders.featured(query.limit).await?;
    Ok(Json(tenders))
}

/// Get tender by ID
#[utoipa::path(
    get,
    path = "/tenders/{id}",
    tag = "tenders",
    params(("id" = String, Path, description = "Tender ID")),
    responses(
        (status = 200, description = "Tender details", body = Tender)
    )
)]
pub async fn get_tender(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tender>> {
    let tender = state.services.tenders.get_by_id(parse_id(&id)).await?;
    Ok(Json(tender))
}

/// Create a tender
#[utoipa::path(
    post,
    path = "/tenders",
    tag = "tenders",
    request_body = CreateTender,
    responses(
        (status = 201, description = "Tender created", body = CreatedResponse)
    )
)]
pub async fn create_tender(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTender>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let tender = state.services.tenders.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Tender created".to_string(),
            id: tender.id,
        }),
    ))
}

/// Update a tender
#[utoipa::path(
    put,
    path = "/tenders/{id}",
    tag = "tenders",
    params(("id" = String, Path, description = "Tender ID")),
    request_body = UpdateTender,
    responses(
        (status = 200, description = "Tender updated", body = MessageResponse)
    )
)]
pub async fn update_tender(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateTender>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.tenders.update(parse_id(&id), &data).await?;
    Ok(Json(MessageResponse::new("Tender updated")))
}

/// Delete a tender
#[utoipa::path(
    delete,
    path = "/tenders/{id}",
    tag = "tenders",
    params(("id" = String, Path, description = "Tender ID")),
    responses(
        (status = 200, description = "Tender deleted", body = MessageResponse)
    )
)]
pub async fn delete_tender(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.tenders.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("Tender deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/tenders/{id}/toggle-active",
    tag = "tenders",
    params(("id" = String, Path, description = "Tender ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_tender_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state.services.tenders.toggle_active(parse_id(&id)).await?;
    let message = if active {
        "Tender activated"
    } else {
        "Tender deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}

/// Toggle the featured flag
#[utoipa::path(
    patch,
    path = "/tenders/{id}/toggle-featured",
    tag = "tenders",
    params(("id" = String, Path, description = "Tender ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_tender_featured(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let featured = state
        .services
        .tenders
        .toggle_featured(parse_id(&id))
        .await?;
    let message = if featured {
        "Tender featured"
    } else {
        "Tender unfeatured"
    };
    Ok(Json(MessageResponse::new(message)))
}
