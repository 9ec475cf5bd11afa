//! Daily visitor counter model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A (day, count) pair for visitor statistics
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct VisitorDayCount {
    pub day: NaiveDate,
    pub count: i32,
}

/// Query parameters for visitor statistics
#[derive(Debug, Deserialize, IntoParams)]
pub struct VisitorStatsQuery {
    /// Number of trailing days to report (default 30)
    pub days: Option<i32>,
}
