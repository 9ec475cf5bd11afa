//! Admin dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Total/active counts for one content collection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntityCounts {
    /// Total rows, active or not
    pub total: i64,
    /// Rows with is_active = true
    pub active: i64,
}

/// Visitor counter totals
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitorTotals {
    /// All-time unique visitor total
    pub total: i64,
    /// Unique visitors today
    pub today: i32,
}

/// Dashboard statistics response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponse {
    pub notices: EntityCounts,
    pub tenders: EntityCounts,
    pub recruitments: EntityCounts,
    pub news: EntityCounts,
    pub sliders: EntityCounts,
    pub achievements: EntityCounts,
    pub media: EntityCounts,
    pub visitors: VisitorTotals,
}

/// Get content and visitor statistics for the admin dashboard
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
