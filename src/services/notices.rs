//! Notices service

use crate::{
    error::AppResult,
    models::notice::{CreateNotice, Notice, UpdateNotice},
    repository::{Repository, ToggleFlag},
};

#[derive(Clone)]
pub struct NoticesService {
    repository: Repository,
}

impl NoticesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List notices, searching when a term is given
    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Notice>> {
        match search {
            Some(term) => self.repository.notices.search(term, active).await,
            None => self.repository.notices.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Notice>> {
        self.repository.notices.list_active(limit).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<Notice>> {
        self.repository.notices.featured(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Notice> {
        self.repository.notices.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateNotice) -> AppResult<Notice> {
        self.repository.notices.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateNotice) -> AppResult<Notice> {
        self.repository.notices.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.notices.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.notices.toggle(id, ToggleFlag::Active).await
    }

    pub async fn toggle_featured(&self, id: i32) -> AppResult<bool> {
        self.repository
            .notices
            .toggle(id, ToggleFlag::Featured)
            .await
    }
}
