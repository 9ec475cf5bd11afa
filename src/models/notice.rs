//! Notice model (public notices with a validity window)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Notice record
///
/// Publicly visible while `is_active` and `valid_until` has not passed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notice {
    pub id: i32,
    pub heading: String,
    pub subheading: String,
    pub published_date: NaiveDate,
    /// Last day the notice is shown on public pages
    pub valid_until: NaiveDate,
    /// URL of the attached document (PDF), if any
    pub document_url: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create notice request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateNotice {
    #[validate(length(min = 1))]
    pub heading: String,
    pub subheading: String,
    /// Publication date (YYYY-MM-DD)
    pub published_date: String,
    /// Validity date (YYYY-MM-DD)
    pub valid_until: String,
    pub document_url: Option<String>,
    pub featured: Option<bool>,
}

/// Update notice request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateNotice {
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub published_date: Option<String>,
    pub valid_until: Option<String>,
    pub document_url: Option<String>,
    pub featured: Option<bool>,
}
