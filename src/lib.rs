//! Pune Customs Commissionerate Content Server
//!
//! REST JSON API backing the department website: public notices, tenders,
//! recruitments, news tickers, sliders, achievements and media galleries,
//! plus the admin back-office CRUD and a cross-collection keyword search.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
