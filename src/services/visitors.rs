//! Visitor counter service

use crate::{error::AppResult, models::visitor::VisitorDayCount, repository::Repository};

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Count a visit from `ip`; returns today's count
    pub async fn record_visit(&self, ip: &str) -> AppResult<i32> {
        self.repository.visitors.record_visit(ip).await
    }

    pub async fn today(&self) -> AppResult<i32> {
        self.repository.visitors.today().await
    }

    pub async fn total(&self) -> AppResult<i64> {
        self.repository.visitors.total().await
    }

    /// Per-day counts for the trailing `days` days
    pub async fn stats(&self, days: i32) -> AppResult<Vec<VisitorDayCount>> {
        self.repository.visitors.stats(days).await
    }
}
