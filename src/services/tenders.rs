//! Tenders service

use crate::{
    error::AppResult,
    models::tender::{CreateTender, Tender, UpdateTender},
    repository::{Repository, ToggleFlag},
};

#[derive(Clone)]
pub struct TendersService {
    repository: Repository,
}

impl TendersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List tenders, searching when a term is given
    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Tender>> {
        match search {
            Some(term) => self.repository.tenders.search(term, active).await,
            None => self.repository.tenders.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Tender>> {
        self.repository.tenders.list_active(limit).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<Tender>> {
        self.repository.tenders.featured(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Tender> {
        self.repository.tenders.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTender) -> AppResult<Tender> {
        self.repository.tenders.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTender) -> AppResult<Tender> {
        self.repository.tenders.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.tenders.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.tenders.toggle(id, ToggleFlag::Active).await
    }

    pub async fn toggle_featured(&self, id: i32) -> AppResult<bool> {
        self.repository
            .tenders
            .toggle(id, ToggleFlag::Featured)
            .await
    }
}
