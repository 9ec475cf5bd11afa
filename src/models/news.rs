//! News ticker model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// News ticker entry, ordered by ranking ascending (lower = higher priority)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct News {
    pub id: i32,
    pub text: String,
    /// Optional target link for the ticker entry
    pub link: Option<String>,
    pub ranking: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create news request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateNews {
    #[validate(length(min = 1))]
    pub text: String,
    pub link: Option<String>,
    #[validate(range(min = 1))]
    pub ranking: i32,
}

/// Update news request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateNews {
    #[validate(length(min = 1))]
    pub text: Option<String>,
    pub link: Option<String>,
    #[validate(range(min = 1))]
    pub ranking: Option<i32>,
}
