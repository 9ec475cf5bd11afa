//! Home page slider model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Slider record, ordered by priority ascending (lower = shown first)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Slider {
    pub id: i32,
    pub heading: String,
    pub description: String,
    pub image_url: String,
    pub link: Option<String>,
    pub priority: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create slider request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateSlider {
    #[validate(length(min = 1))]
    pub heading: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub link: Option<String>,
    #[validate(range(min = 1))]
    pub priority: i32,
}

/// Update slider request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateSlider {
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    pub link: Option<String>,
    #[validate(range(min = 1))]
    pub priority: Option<i32>,
}
