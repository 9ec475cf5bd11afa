//! Admin dashboard statistics service

use crate::{
    api::stats::{EntityCounts, StatsResponse, VisitorTotals},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Total/active counts per entity kind plus visitor totals
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let r = &self.repository;

        Ok(StatsResponse {
            notices: EntityCounts {
                total: r.notices.count(None).await?,
                active: r.notices.count(Some(true)).await?,
            },
            tenders: EntityCounts {
                total: r.tenders.count(None).await?,
                active: r.tenders.count(Some(true)).await?,
            },
            recruitments: EntityCounts {
                total: r.recruitments.count(None).await?,
                active: r.recruitments.count(Some(true)).await?,
            },
            news: EntityCounts {
                total: r.news.count(None).await?,
                active: r.news.count(Some(true)).await?,
            },
            sliders: EntityCounts {
                total: r.sliders.count(None).await?,
                active: r.sliders.count(Some(true)).await?,
            },
            achievements: EntityCounts {
                total: r.achievements.count(None).await?,
                active: r.achievements.count(Some(true)).await?,
            },
            media: EntityCounts {
                total: r.media.count(None).await?,
                active: r.media.count(Some(true)).await?,
            },
            visitors: VisitorTotals {
                total: r.visitors.total().await?,
                today: r.visitors.today().await?,
            },
        })
    }
}
