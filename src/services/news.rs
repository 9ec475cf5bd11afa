//! News ticker service

use crate::{
    error::AppResult,
    models::news::{CreateNews, News, UpdateNews},
    repository::Repository,
};

#[derive(Clone)]
pub struct NewsService {
    repository: Repository,
}

impl NewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<News>> {
        match search {
            Some(term) => self.repository.news.search(term, active).await,
            None => self.repository.news.list(active, limit).await,
        }
    }

    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<News>> {
        self.repository.news.list_active(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<News> {
        self.repository.news.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateNews) -> AppResult<News> {
        self.repository.news.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateNews) -> AppResult<News> {
        self.repository.news.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.news.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.news.toggle_active(id).await
    }
}
