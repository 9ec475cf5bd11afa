//! Achievements service

use crate::{
    error::AppResult,
    models::achievement::{Achievement, CreateAchievement, UpdateAchievement},
    repository::Repository,
};

#[derive(Clone)]
pub struct AchievementsService {
    repository: Repository,
}

impl AchievementsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Achievement>> {
        match search {
            Some(term) => self.repository.achievements.search(term, active).await,
            None => self.repository.achievements.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Achievement>> {
        self.repository.achievements.list_active(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Achievement> {
        self.repository.achievements.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAchievement) -> AppResult<Achievement> {
        self.repository.achievements.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateAchievement) -> AppResult<Achievement> {
        self.repository.achievements.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.achievements.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.achievements.toggle_active(id).await
    }
}
