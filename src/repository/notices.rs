//! Notices repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::notice::{CreateNotice, Notice, UpdateNotice},
};

use super::base::{parse_date, BaseRepository, TableSpec, ToggleFlag};

const NOTICES: TableSpec = TableSpec {
    table: "notices",
    search_columns: &["heading", "subheading"],
    order_by: "published_date DESC, id DESC",
};

#[derive(Clone)]
pub struct NoticesRepository {
    base: BaseRepository<Notice>,
}

impl NoticesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, NOTICES),
        }
    }

    pub async fn list(&self, active: Option<bool>, limit: Option<i64>) -> AppResult<Vec<Notice>> {
        self.base.list(active, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Notice> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle(&self, id: i32, flag: ToggleFlag) -> AppResult<bool> {
        self.base.toggle(id, flag).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<Notice>> {
        self.base.search(term, active).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<Notice>> {
        self.base.featured(limit).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    /// Active notices whose validity window has not closed
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Notice>> {
        let mut sql = String::from(
            "SELECT * FROM notices WHERE is_active = TRUE AND valid_until >= CURRENT_DATE \
             ORDER BY published_date DESC, id DESC",
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $1");
        }
        let mut query = sqlx::query_as::<_, Notice>(&sql);
        if let Some(l) = limit {
            query = query.bind(l);
        }
        let rows = query.fetch_all(self.base.pool()).await?;
        Ok(rows)
    }

    /// Create a notice
    pub async fn create(&self, data: &CreateNotice) -> AppResult<Notice> {
        let published_date = parse_date(&data.published_date, "published_date")?;
        let valid_until = parse_date(&data.valid_until, "valid_until")?;

        let row = sqlx::query_as::<_, Notice>(
            r#"
            INSERT INTO notices (heading, subheading, published_date, valid_until, document_url, featured)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.heading)
        .bind(&data.subheading)
        .bind(published_date)
        .bind(valid_until)
        .bind(&data.document_url)
        .bind(data.featured.unwrap_or(false))
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    /// Update a notice (partial merge, stamps updated_at)
    pub async fn update(&self, id: i32, data: &UpdateNotice) -> AppResult<Notice> {
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
        add_f!(data.subheading, "subheading");
        add_f!(data.published_date, "published_date");
        add_f!(data.valid_until, "valid_until");
        add_f!(data.document_url, "document_url");
        add_f!(data.featured, "featured");

        let query = format!(
            "UPDATE notices SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let published_date = match &data.published_date {
            Some(s) => Some(parse_date(s, "published_date")?),
            None => None,
        };
        let valid_until = match &data.valid_until {
            Some(s) => Some(parse_date(s, "valid_until")?),
            None => None,
        };

        let mut builder = sqlx::query_as::<_, Notice>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.heading);
        bind_f!(data.subheading);
        if let Some(d) = published_date {
            builder = builder.bind(d);
        }
        if let Some(d) = valid_until {
            builder = builder.bind(d);
        }
        bind_f!(data.document_url);
        bind_f!(data.featured);

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notice {} not found", id)))
    }
}
