//! Cross-collection search endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::services::search::{SearchKind, SearchResponse};

/// Query parameters for GET /search
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Free-text query; fewer than 2 trimmed characters returns an empty,
    /// still-successful result
    pub q: Option<String>,
    /// Restrict the search to one kind (news, notices, tenders,
    /// recruitments, media, pages)
    #[serde(rename = "type")]
    pub kind: Option<SearchKind>,
    /// Result cap (default 50)
    pub limit: Option<i64>,
}

/// Keyword search across all public content
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Merged search results", body = SearchResponse)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let q = params.q.unwrap_or_default();
    match state
        .services
        .search
        .search(&q, params.kind, params.limit)
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("search failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse::failure(q.trim(), "Search failed".to_string())),
            )
                .into_response()
        }
    }
}
