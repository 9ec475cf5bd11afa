//! Media gallery repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::media::{CreateMediaItem, MediaItem, MediaKind, UpdateMediaItem},
};

use super::base::{parse_date, BaseRepository, TableSpec, ToggleFlag};

const MEDIA: TableSpec = TableSpec {
    table: "media",
    search_columns: &["heading", "description"],
    order_by: "media_date DESC, id DESC",
};

#[derive(Clone)]
pub struct MediaRepository {
    base: BaseRepository<MediaItem>,
}

impl MediaRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, MEDIA),
        }
    }

    /// List media items, optionally narrowed to one kind
    pub async fn list(
        &self,
        kind: Option<MediaKind>,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<MediaItem>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if kind.is_some() {
            conditions.push(format!("media_type = ${}", idx));
            idx += 1;
        }
        if active.is_some() {
            conditions.push(format!("is_active = ${}", idx));
            idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };

        let mut sql = format!(
            "SELECT * FROM media {}ORDER BY media_date DESC, id DESC",
            where_clause
        );
        if limit.is_some() {
            sql.push_str(&format!(" LIMIT ${}", idx));
        }

        let mut query = sqlx::query_as::<_, MediaItem>(&sql);
        if let Some(k) = kind {
            query = query.bind(k);
        }
        if let Some(a) = active {
            query = query.bind(a);
        }
        if let Some(l) = limit {
            query = query.bind(l);
        }

        let rows = query.fetch_all(self.base.pool()).await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MediaItem> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle(&self, id: i32, flag: ToggleFlag) -> AppResult<bool> {
        self.base.toggle(id, flag).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<MediaItem>> {
        self.base.search(term, active).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<MediaItem>> {
        self.base.featured(limit).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    pub async fn create(&self, data: &CreateMediaItem) -> AppResult<MediaItem> {
        let media_date = parse_date(&data.media_date, "media_date")?;

        let row = sqlx::query_as::<_, MediaItem>(
            r#"
            INSERT INTO media (media_type, heading, description, media_date, link, featured)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.media_type)
        .bind(&data.heading)
        .bind(&data.description)
        .bind(media_date)
        .bind(&data.link)
        .bind(data.featured.unwrap_or(false))
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateMediaItem) -> AppResult<MediaItem> {
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

        add_f!(data.media_type, "media_type");
        add_f!(data.heading, "heading");
        add_f!(data.description, "description");
        add_f!(data.media_date, "media_date");
        add_f!(data.link, "link");
        add_f!(data.featured, "featured");

        let query = format!(
            "UPDATE media SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let media_date = match &data.media_date {
            Some(s) => Some(parse_date(s, "media_date")?),
            None => None,
        };

        let mut builder = sqlx::query_as::<_, MediaItem>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        if let Some(k) = data.media_type {
            builder = builder.bind(k);
        }
        bind_f!(data.heading);
        bind_f!(data.description);
        if let Some(d) = media_date {
            builder = builder.bind(d);
        }
        bind_f!(data.link);
        bind_f!(data.featured);

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Media item {} not found", id)))
    }
}
