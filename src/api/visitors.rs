//! Visitor counter API endpoints

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::visitor::{VisitorDayCount, VisitorStatsQuery},
};

/// Today's visitor count after recording a visit
#[derive(Serialize, ToSchema)]
pub struct VisitorCountResponse {
    pub count: i32,
}

/// Visitor counter totals
#[derive(Serialize, ToSchema)]
pub struct VisitorTotalsResponse {
    /// All-time unique visitor total
    pub total: i64,
    /// Unique visitors today
    pub today: i32,
}

fn header_ip<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Client IP: first X-Forwarded-For entry when behind the reverse proxy,
/// then X-Real-IP, otherwise the socket peer address
fn client_ip(headers: &HeaderMap, addr: &SocketAddr) -> String {
    header_ip(headers, "x-forwarded-for")
        .or_else(|| header_ip(headers, "x-real-ip"))
        .map(str::to_string)
        .unwrap_or_else(|| addr.ip().to_string())
}

/// Record a visit from the calling IP
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    responses(
        (status = 200, description = "Visit recorded", body = VisitorCountResponse)
    )
)]
pub async fn record_visit(
    State(state): State<crate::AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> AppResult<Json<VisitorCountResponse>> {
    let ip = client_ip(&headers, &addr);
    let count = state.services.visitors.record_visit(&ip).await?;
    Ok(Json(VisitorCountResponse { count }))
}

/// All-time and today's visitor totals
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    responses(
        (status = 200, description = "Visitor totals", body = VisitorTotalsResponse)
    )
)]
pub async fn visitor_totals(
    State(state): State<crate::AppState>,
) -> AppResult<Json<VisitorTotalsResponse>> {
    let total = state.services.visitors.total().await?;
    let today = state.services.visitors.today().await?;
    Ok(Json(VisitorTotalsResponse { total, today }))
}

/// Per-day visitor counts for the trailing N days (default 30)
#[utoipa::path(
    get,
    path = "/visitors/stats",
    tag = "visitors",
    params(VisitorStatsQuery),
    responses(
        (status = 200, description = "Daily counts, ascending by date", body = [VisitorDayCount])
    )
)]
pub async fn visitor_stats(
    State(state): State<crate::AppState>,
    Query(query): Query<VisitorStatsQuery>,
) -> AppResult<Json<Vec<VisitorDayCount>>> {
    let days = query.days.unwrap_or(30).max(1);
    let stats = state.services.visitors.stats(days).await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        let addr: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        assert_eq!(client_ip(&headers, &addr), "203.0.113.7");
    }

    #[test]
    fn real_ip_header_is_second_choice() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.9".parse().unwrap());
        let addr: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        assert_eq!(client_ip(&headers, &addr), "198.51.100.9");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let headers = HeaderMap::new();
        let addr: SocketAddr = "192.0.2.4:1234".parse().unwrap();
        assert_eq!(client_ip(&headers, &addr), "192.0.2.4");
    }
}
