//! Achievement model (departmental achievements shown on the home page)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Achievement record, same ordering convention as sliders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Achievement {
    pub id: i32,
    pub heading: String,
    pub description: String,
    pub image_url: String,
    pub priority: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create achievement request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateAchievement {
    #[validate(length(min = 1))]
    pub heading: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    #[validate(range(min = 1))]
    pub priority: i32,
}

/// Update achievement request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAchievement {
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub priority: Option<i32>,
}
