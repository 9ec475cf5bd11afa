//! Recruitment model (vacancy announcements with a validity window)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Recruitment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recruitment {
    pub id: i32,
    pub heading: String,
    pub subheading: String,
    pub published_date: NaiveDate,
    /// Last day the announcement is shown on public pages
    pub valid_until: NaiveDate,
    pub document_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create recruitment request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateRecruitment {
    #[validate(length(min = 1))]
    pub heading: String,
    pub subheading: String,
    /// Publication date (YYYY-MM-DD)
    pub published_date: String,
    /// Validity date (YYYY-MM-DD)
    pub valid_until: String,
    pub document_url: Option<String>,
}

/// Update recruitment request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateRecruitment {
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub published_date: Option<String>,
    pub valid_until: Option<String>,
    pub document_url: Option<String>,
}
