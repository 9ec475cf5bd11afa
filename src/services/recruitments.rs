//! Recruitments service

use crate::{
    error::AppResult,
    models::recruitment::{CreateRecruitment, Recruitment, UpdateRecruitment},
    repository::Repository,
};

#[derive(Clone)]
pub struct RecruitmentsService {
    repository: Repository,
}

impl RecruitmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Recruitment>> {
        match search {
            Some(term) => self.repository.recruitments.search(term, active).await,
            None => self.repository.recruitments.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Recruitment>> {
        self.repository.recruitments.list_active(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Recruitment> {
        self.repository.recruitments.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateRecruitment) -> AppResult<Recruitment> {
        self.repository.recruitments.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateRecruitment) -> AppResult<Recruitment> {
        self.repository.recruitments.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.recruitments.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.recruitments.toggle_active(id).await
    }
}
