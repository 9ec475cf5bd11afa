//! Data models for the content entities

pub mod achievement;
pub mod media;
pub mod news;
pub mod notice;
pub mod recruitment;
pub mod slider;
pub mod tender;
pub mod visitor;

// Re-export commonly used types
pub use achievement::Achievement;
pub use media::{MediaItem, MediaKind};
pub use news::News;
pub use notice::Notice;
pub use recruitment::Recruitment;
pub use slider::Slider;
pub use tender::Tender;

use serde::Deserialize;
use utoipa::IntoParams;

/// Common query parameters for entity list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive substring search over the entity's text fields
    pub search: Option<String>,
    /// Filter on the is_active flag
    pub active: Option<bool>,
    /// Maximum number of records returned
    pub limit: Option<i64>,
}

/// Query parameters for limit-only endpoints (active/featured lists)
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}
