//! Tender model (procurement tenders with a closing date)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Tender record
///
/// Publicly visible while `is_active` and `last_date` has not passed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tender {
    pub id: i32,
    pub heading: String,
    pub description: String,
    pub published_date: NaiveDate,
    /// Last day for bid submission
    pub last_date: NaiveDate,
    /// Bid opening date
    pub opening_date: NaiveDate,
    /// Departmental tender number (e.g. PC/2024/T-12)
    pub tender_no: String,
    pub document_url: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create tender request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTender {
    #[validate(length(min = 1))]
    pub heading: String,
    pub description: String,
    /// Publication date (YYYY-MM-DD)
    pub published_date: String,
    /// Closing date (YYYY-MM-DD)
    pub last_date: String,
    /// Opening date (YYYY-MM-DD)
    pub opening_date: String,
    #[validate(length(min = 1))]
    pub tender_no: String,
    pub document_url: Option<String>,
    pub featured: Option<bool>,
}

/// Update tender request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateTender {
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub last_date: Option<String>,
    pub opening_date: Option<String>,
    #[validate(length(min = 1))]
    pub tender_no: Option<String>,
    pub document_url: Option<String>,
    pub featured: Option<bool>,
}
