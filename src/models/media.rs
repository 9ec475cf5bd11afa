//! Media gallery model (photos, videos, documents, press coverage)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Media item category (stored as text, discriminates the single media table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Document,
    Press,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
            MediaKind::Press => "press",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(MediaKind::Photo),
            "video" => Ok(MediaKind::Video),
            "document" => Ok(MediaKind::Document),
            "press" => Ok(MediaKind::Press),
            _ => Err(format!("Invalid media kind: {}", s)),
        }
    }
}

// SQLx conversion for MediaKind (TEXT column)
impl sqlx::Type<Postgres> for MediaKind {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for MediaKind {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for MediaKind {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Media gallery record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MediaItem {
    pub id: i32,
    pub media_type: MediaKind,
    pub heading: String,
    pub description: String,
    pub media_date: NaiveDate,
    /// Link to the photo, video, document or press article
    pub link: String,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create media item request
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateMediaItem {
    pub media_type: MediaKind,
    #[validate(length(min = 1))]
    pub heading: String,
    pub description: String,
    /// Media date (YYYY-MM-DD)
    pub media_date: String,
    #[validate(length(min = 1))]
    pub link: String,
    pub featured: Option<bool>,
}

/// Update media item request (partial)
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateMediaItem {
    pub media_type: Option<MediaKind>,
    #[validate(length(min = 1))]
    pub heading: Option<String>,
    pub description: Option<String>,
    pub media_date: Option<String>,
    #[validate(length(min = 1))]
    pub link: Option<String>,
    pub featured: Option<bool>,
}

/// Query parameters for the media list endpoint
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct MediaQuery {
    /// Filter by media kind (photo, video, document, press)
    #[serde(rename = "type")]
    pub media_type: Option<MediaKind>,
    pub search: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<i64>,
}
