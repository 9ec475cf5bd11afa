//! Business logic services

pub mod achievements;
pub mod media;
pub mod news;
pub mod notices;
pub mod recruitments;
pub mod search;
pub mod sliders;
pub mod stats;
pub mod tenders;
pub mod visitors;

use crate::{config::SearchConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pool: sqlx::PgPool,
    pub notices: notices::NoticesService,
    pub tenders: tenders::TendersService,
    pub recruitments: recruitments::RecruitmentsService,
    pub news: news::NewsService,
    pub sliders: sliders::SlidersService,
    pub achievements: achievements::AchievementsService,
    pub media: media::MediaService,
    pub visitors: visitors::VisitorsService,
    pub search: search::SearchService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, search_config: SearchConfig) -> Self {
        Self {
            pool: repository.pool.clone(),
            notices: notices::NoticesService::new(repository.clone()),
            tenders: tenders::TendersService::new(repository.clone()),
            recruitments: recruitments::RecruitmentsService::new(repository.clone()),
            news: news::NewsService::new(repository.clone()),
            sliders: sliders::SlidersService::new(repository.clone()),
            achievements: achievements::AchievementsService::new(repository.clone()),
            media: media::MediaService::new(repository.clone()),
            visitors: visitors::VisitorsService::new(repository.clone()),
            search: search::SearchService::new(repository.clone(), search_config),
            stats: stats::StatsService::new(repository),
        }
    }

    /// Database pool, for connectivity probes
    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}
