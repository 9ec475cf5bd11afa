//! Achievements repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::achievement::{Achievement, CreateAchievement, UpdateAchievement},
};

use super::base::{BaseRepository, TableSpec, ToggleFlag};

const ACHIEVEMENTS: TableSpec = TableSpec {
    table: "achievements",
    search_columns: &["heading", "description"],
    order_by: "priority ASC, created_at DESC",
};

#[derive(Clone)]
pub struct AchievementsRepository {
    base: BaseRepository<Achievement>,
}

impl AchievementsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, ACHIEVEMENTS),
        }
    }

    pub async fn list(
        &self,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Achievement>> {
        self.base.list(active, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Achievement> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.base.toggle(id, ToggleFlag::Active).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<Achievement>> {
        self.base.search(term, active).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    /// Active achievements in display order
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Achievement>> {
        self.base.list(Some(true), limit).await
    }

    pub async fn create(&self, data: &CreateAchievement) -> AppResult<Achievement> {
        let row = sqlx::query_as::<_, Achievement>(
            r#"
            INSERT INTO achievements (heading, description, image_url, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.heading)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.priority)
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateAchievement) -> AppResult<Achievement> {
        let mut sets = vec!["updated_at = NOW()".to_string()];
        let mut idx = 1;

        macro_rules! add_f {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_f!(data.heading, "heading");
        add_f!(data.description, "description");
        add_f!(data.image_url, "image_url");
        add_f!(data.priority, "priority");

        let query = format!(
            "UPDATE achievements SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Achievement>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.heading);
        bind_f!(data.description);
        bind_f!(data.image_url);
        bind_f!(data.priority);

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Achievement {} not found", id)))
    }
}
