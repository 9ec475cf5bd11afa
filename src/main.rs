//! Pune Customs Content Server
//!
//! REST API backing the Pune Customs Commissionerate website.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use punecustoms_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "punecustoms_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        "Starting Pune Customs Content Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.search.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Notices
        .route("/notices", get(api::notices::list_notices))
        .route("/notices", post(api::notices::create_notice))
        .route("/notices/active", get(api::notices::active_notices))
        .route("/notices/featured", get(api::notices::featured_notices))
        .route("/notices/:id", get(api::notices::get_notice))
        .route("/notices/:id", put(api::notices::update_notice))
        .route("/notices/:id", delete(api::notices::delete_notice))
        .route(
            "/notices/:id/toggle-active",
            patch(api::notices::toggle_notice_active),
        )
        .route(
            "/notices/:id/toggle-featured",
            patch(api::notices::toggle_notice_featured),
        )
        // Tenders
        .route("/tenders", get(api::tenders::list_tenders))
        .route("/tenders", post(api::tenders::create_tender))
        .route("/tenders/active", get(api::tenders::active_tenders))
        .route("/tenders/featured", get(api::tenders::featured_tenders))
        .route("/tenders/:id", get(api::tenders::get_tender))
        .route("/tenders/:id", put(api::tenders::update_tender))
        .route("/tenders/:id", delete(api::tenders::delete_tender))
        .route(
            "/tenders/:id/toggle-active",
            patch(api::tenders::toggle_tender_active),
        )
        .route(
            "/tenders/:id/toggle-featured",
            patch(api::tenders::toggle_tender_featured),
        )
        // Recruitments
        .route("/recruitments", get(api::recruitments::list_recruitments))
        .route("/recruitments", post(api::recruitments::create_recruitment))
        .route(
            "/recruitments/active",
            get(api::recruitments::active_recruitments),
        )
        .route("/recruitments/:id", get(api::recruitments::get_recruitment))
        .route(
            "/recruitments/:id",
            put(api::recruitments::update_recruitment),
        )
        .route(
            "/recruitments/:id",
            delete(api::recruitments::delete_recruitment),
        )
        .route(
            "/recruitments/:id/toggle-active",
            patch(api::recruitments::toggle_recruitment_active),
        )
        // News tickers
        .route("/news", get(api::news::list_news))
        .route("/news", post(api::news::create_news))
        .route("/news/active", get(api::news::active_news))
        .route("/news/:id", get(api::news::get_news))
        .route("/news/:id", put(api::news::update_news))
        .route("/news/:id", delete(api::news::delete_news))
        .route("/news/:id/toggle-active", patch(api::news::toggle_news_active))
        // Sliders
        .route("/sliders", get(api::sliders::list_sliders))
        .route("/sliders", post(api::sliders::create_slider))
        .route("/sliders/active", get(api::sliders::active_sliders))
        .route("/sliders/:id", get(api::sliders::get_slider))
        .route("/sliders/:id", put(api::sliders::update_slider))
        .route("/sliders/:id", delete(api::sliders::delete_slider))
        .route(
            "/sliders/:id/toggle-active",
            patch(api::sliders::toggle_slider_active),
        )
        // Achievements
        .route("/achievements", get(api::achievements::list_achievements))
        .route("/achievements", post(api::achievements::create_achievement))
        .route(
            "/achievements/active",
            get(api::achievements::active_achievements),
        )
        .route("/achievements/:id", get(api::achievements::get_achievement))
        .route(
            "/achievements/:id",
            put(api::achievements::update_achievement),
        )
        .route(
            "/achievements/:id",
            delete(api::achievements::delete_achievement),
        )
        .route(
            "/achievements/:id/toggle-active",
            patch(api::achievements::toggle_achievement_active),
        )
        // Media gallery
        .route("/media", get(api::media::list_media))
        .route("/media", post(api::media::create_media))
        .route("/media/featured", get(api::media::featured_media))
        .route("/media/:id", get(api::media::get_media))
        .route("/media/:id", put(api::media::update_media))
        .route("/media/:id", delete(api::media::delete_media))
        .route(
            "/media/:id/toggle-active",
            patch(api::media::toggle_media_active),
        )
        .route(
            "/media/:id/toggle-featured",
            patch(api::media::toggle_media_featured),
        )
        // Search
        .route("/search", get(api::search::search))
        // Visitors
        .route("/visitors", post(api::visitors::record_visit))
        .route("/visitors", get(api::visitors::visitor_totals))
        .route("/visitors/stats", get(api::visitors::visitor_stats))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
