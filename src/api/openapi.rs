//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    achievements, health, media, news, notices, recruitments, search, sliders, stats, tenders,
    visitors,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pune Customs API",
        version = "1.0.0",
        description = "Content management REST API for the Pune Customs Commissionerate website"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Notices
        notices::list_notices,
        notices::active_notices,
        notices::featured_notices,
        notices::get_notice,
        notices::create_notice,
        notices::update_notice,
        notices::delete_notice,
        notices::toggle_notice_active,
        notices::toggle_notice_featured,
        // Tenders
        tenders::list_tenders,
        tenders::active_tenders,
        tenders::featured_tenders,
        tenders::get_tender,
        tenders::create_tender,
        tenders::update_tender,
        tenders::delete_tender,
        tenders::toggle_tender_active,
        tenders::toggle_tender_featured,
        // Recruitments
        recruitments::list_recruitments,
        recruitments::active_recruitments,
        recruitments::get_recruitment,
        recruitments::create_recruitment,
        recruitments::update_recruitment,
        recruitments::delete_recruitment,
        recruitments::toggle_recruitment_active,
        // News tickers
        news::list_news,
        news::active_news,
        news::get_news,
        news::create_news,
        news::update_news,
        news::delete_news,
        news::toggle_news_active,
        // Sliders
        sliders::list_sliders,
        sliders::active_sliders,
        sliders::get_slider,
        sliders::create_slider,
        sliders::update_slider,
        sliders::delete_slider,
        sliders::toggle_slider_active,
        // Achievements
        achievements::list_achievements,
        achievements::active_achievements,
        achievements::get_achievement,
        achievements::create_achievement,
        achievements::update_achievement,
        achievements::delete_achievement,
        achievements::toggle_achievement_active,
        // Media gallery
        media::list_media,
        media::featured_media,
        media::get_media,
        media::create_media,
        media::update_media,
        media::delete_media,
        media::toggle_media_active,
        media::toggle_media_featured,
        // Search
        search::search,
        // Visitors
        visitors::record_visit,
        visitors::visitor_totals,
        visitors::visitor_stats,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Notices
            crate::models::notice::Notice,
            crate::models::notice::CreateNotice,
            crate::models::notice::UpdateNotice,
            // Tenders
            crate::models::tender::Tender,
            crate::models::tender::CreateTender,
            crate::models::tender::UpdateTender,
            // Recruitments
            crate::models::recruitment::Recruitment,
            crate::models::recruitment::CreateRecruitment,
            crate::models::recruitment::UpdateRecruitment,
            // News tickers
            crate::models::news::News,
            crate::models::news::CreateNews,
            crate::models::news::UpdateNews,
            // Sliders
            crate::models::slider::Slider,
            crate::models::slider::CreateSlider,
            crate::models::slider::UpdateSlider,
            // Achievements
            crate::models::achievement::Achievement,
            crate::models::achievement::CreateAchievement,
            crate::models::achievement::UpdateAchievement,
            // Media gallery
            crate::models::media::MediaKind,
            crate::models::media::MediaItem,
            crate::models::media::CreateMediaItem,
            crate::models::media::UpdateMediaItem,
            // Search
            crate::services::search::SearchKind,
            crate::services::search::SearchHit,
            crate::services::search::TypeCounts,
            crate::services::search::SearchResponse,
            // Visitors
            crate::models::visitor::VisitorDayCount,
            visitors::VisitorCountResponse,
            visitors::VisitorTotalsResponse,
            // Stats
            stats::StatsResponse,
            stats::EntityCounts,
            stats::VisitorTotals,
            // Health
            health::HealthResponse,
            // Common envelopes
            super::MessageResponse,
            super::CreatedResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "notices", description = "Public notices"),
        (name = "tenders", description = "Tender announcements"),
        (name = "recruitments", description = "Recruitment announcements"),
        (name = "news", description = "News ticker items"),
        (name = "sliders", description = "Homepage slider images"),
        (name = "achievements", description = "Achievement highlights"),
        (name = "media", description = "Media gallery"),
        (name = "search", description = "Cross-collection keyword search"),
        (name = "visitors", description = "Daily unique visitor counter"),
        (name = "stats", description = "Admin dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
