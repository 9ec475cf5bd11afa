//! Repository layer for database operations

pub mod achievements;
pub mod base;
pub mod media;
pub mod news;
pub mod notices;
pub mod recruitments;
pub mod sliders;
pub mod tenders;
pub mod visitors;

pub use base::ToggleFlag;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub notices: notices::NoticesRepository,
    pub tenders: tenders::TendersRepository,
    pub recruitments: recruitments::RecruitmentsRepository,
    pub news: news::NewsRepository,
    pub sliders: sliders::SlidersRepository,
    pub achievements: achievements::AchievementsRepository,
    pub media: media::MediaRepository,
    pub visitors: visitors::VisitorsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            notices: notices::NoticesRepository::new(pool.clone()),
            tenders: tenders::TendersRepository::new(pool.clone()),
            recruitments: recruitments::RecruitmentsRepository::new(pool.clone()),
            news: news::NewsRepository::new(pool.clone()),
            sliders: sliders::SlidersRepository::new(pool.clone()),
            achievements: achievements::AchievementsRepository::new(pool.clone()),
            media: media::MediaRepository::new(pool.clone()),
            visitors: visitors::VisitorsRepository::new(pool.clone()),
            pool,
        }
    }
}
