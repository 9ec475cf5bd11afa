//! API handlers for the REST endpoints

pub mod achievements;
pub mod health;
pub mod media;
pub mod news;
pub mod notices;
pub mod openapi;
pub mod recruitments;
pub mod search;
pub mod sliders;
pub mod stats;
pub mod tenders;
pub mod visitors;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard success body for mutations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Success body for creations
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

/// Parse a path identifier.
///
/// An unparsable id maps to 0, which is never allocated, so the lookup falls
/// through to not-found instead of a distinct parse error.
pub(crate) fn parse_id(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42"), 42);
    }

    #[test]
    fn garbage_ids_map_to_zero() {
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id(""), 0);
        assert_eq!(parse_id("12abc"), 0);
    }
}
