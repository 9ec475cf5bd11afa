//! Sliders service

use crate::{
    error::AppResult,
    models::slider::{CreateSlider, Slider, UpdateSlider},
    repository::Repository,
};

#[derive(Clone)]
pub struct SlidersService {
    repository: Repository,
}

impl SlidersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Slider>> {
        match search {
            Some(term) => self.repository.sliders.search(term, active).await,
            None => self.repository.sliders.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Slider>> {
        self.repository.sliders.list_active(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Slider> {
        self.repository.sliders.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateSlider) -> AppResult<Slider> {
        self.repository.sliders.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateSlider) -> AppResult<Slider> {
        self.repository.sliders.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.sliders.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.sliders.toggle_active(id).await
    }
}
