//! News ticker API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::news::{CreateNews, News, UpdateNews},
    models::{LimitQuery, ListQuery},
};

use super::{parse_id, CreatedResponse, MessageResponse};

/// List news tickers with optional search/active filters
#[utoipa::path(
    get,
    path = "/news",
    tag = "news",
    params(ListQuery),
    responses(
        (status = 200, description = "News list", body = [News])
    )
)]
pub async fn list_news(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<News>>> {
    let news = state
        .services
        .news
        .list(query.search.as_deref(), query.active, query.limit)
        .await?;
    Ok(Json(news))
}

/// List active tickers in display order
#[utoipa::path(
    get,
    path = "/news/active",
    tag = "news",
    params(LimitQuery),
    responses(
        (status = 200, description = "Active news tickers", body = [News])
    )
)]
pub async fn active_news(
    State(state): State<crate::AppState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<News>>> {
    let news = state.services.news.list_active(query.limit).await?;
    Ok(Json(news))
}

/// Get news ticker by ID
#[utoipa::path(
    get,
    path = "/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News ID")),
    responses(
        (status = 200, description = "News details", body = News)
    )
)]
pub async fn get_news(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<News>> {
    let news = state.services.news.get_by_id(parse_id(&id)).await?;
    Ok(Json(news))
}

/// Create a news ticker
#[utoipa::path(
    post,
    path = "/news",
    tag = "news",
    request_body = CreateNews,
    responses(
        (status = 201, description = "News created", body = CreatedResponse)
    )
)]
pub async fn create_news(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateNews>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let news = state.services.news.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "News created".to_string(),
            id: news.id,
        }),
    ))
}

/// Update a news ticker
#[utoipa::path(
    put,
    path = "/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News ID")),
    request_body = UpdateNews,
    responses(
        (status = 200, description = "News updated", body = MessageResponse)
    )
)]
pub async fn update_news(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateNews>,
) -> AppResult<Json<MessageResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.services.news.update(parse_id(&id), &data).await?;
    Ok(Json(MessageResponse::new("News updated")))
}

/// Delete a news ticker
#[utoipa::path(
    delete,
    path = "/news/{id}",
    tag = "news",
    params(("id" = String, Path, description = "News ID")),
    responses(
        (status = 200, description = "News deleted", body = MessageResponse)
    )
)]
pub async fn delete_news(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.news.delete(parse_id(&id)).await?;
    Ok(Json(MessageResponse::new("News deleted")))
}

/// Toggle the is_active flag
#[utoipa::path(
    patch,
    path = "/news/{id}/toggle-active",
    tag = "news",
    params(("id" = String, Path, description = "News ID")),
    responses(
        (status = 200, description = "Flag toggled", body = MessageResponse)
    )
)]
pub async fn toggle_news_active(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let active = state.services.news.toggle_active(parse_id(&id)).await?;
    let message = if active {
        "News activated"
    } else {
        "News deactivated"
    };
    Ok(Json(MessageResponse::new(message)))
}
