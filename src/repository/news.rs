//! News ticker repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::news::{CreateNews, News, UpdateNews},
};

use super::base::{BaseRepository, TableSpec, ToggleFlag};

// Tickers only carry free text; ranking drives the display order
const NEWS: TableSpec = TableSpec {
    table: "news",
    search_columns: &["text"],
    order_by: "ranking ASC, created_at DESC",
};

#[derive(Clone)]
pub struct NewsRepository {
    base: BaseRepository<News>,
}

impl NewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, NEWS),
        }
    }

    pub async fn list(&self, active: Option<bool>, limit: Option<i64>) -> AppResult<Vec<News>> {
        self.base.list(active, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<News> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.base.toggle(id, ToggleFlag::Active).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<News>> {
        self.base.search(term, active).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    /// Active tickers in display order
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<News>> {
        self.base.list(Some(true), limit).await
    }

    pub async fn create(&self, data: &CreateNews) -> AppResult<News> {
        let row = sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (text, link, ranking)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.text)
        .bind(&data.link)
        .bind(data.ranking)
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateNews) -> AppResult<News> {
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

        add_f!(data.text, "text");
        add_f!(data.link, "link");
        add_f!(data.ranking, "ranking");

        let query = format!(
            "UPDATE news SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, News>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.text);
        bind_f!(data.link);
        bind_f!(data.ranking);

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News {} not found", id)))
    }
}
