//! Media gallery service

use crate::{
    error::AppResult,
    models::media::{CreateMediaItem, MediaItem, MediaKind, UpdateMediaItem},
    repository::{Repository, ToggleFlag},
};

#[derive(Clone)]
pub struct MediaService {
    repository: Repository,
}

impl MediaService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List media, searching when a term is given and filtering by kind
    pub async fn list(
        &self,
        kind: Option<MediaKind>,
        search: Option<&str>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<MediaItem>> {
        match search {
            Some(term) => {
                let mut items = self.repository.media.search(term, active).await?;
                if let Some(k) = kind {
                    items.retain(|m| m.media_type == k);
                }
                Ok(items)
            }
            None => self.repository.media.list(kind, active, limit).await,
        }
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<MediaItem>> {
        self.repository.media.featured(limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MediaItem> {
        self.repository.media.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateMediaItem) -> AppResult<MediaItem> {
        self.repository.media.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateMediaItem) -> AppResult<MediaItem> {
        self.repository.media.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.media.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.repository.media.toggle(id, ToggleFlag::Active).await
    }

    pub async fn toggle_featured(&self, id: i32) -> AppResult<bool> {
        self.repository.media.toggle(id, ToggleFlag::Featured).await
    }
}
