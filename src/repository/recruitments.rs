//! Recruitments repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::recruitment::{CreateRecruitment, Recruitment, UpdateRecruitment},
};

use super::base::{parse_date, BaseRepository, TableSpec, ToggleFlag};

const RECRUITMENTS: TableSpec = TableSpec {
    table: "recruitments",
    search_columns: &["heading", "subheading"],
    order_by: "published_date DESC, id DESC",
};

#[derive(Clone)]
pub struct RecruitmentsRepository {
    base: BaseRepository<Recruitment>,
}

impl RecruitmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, RECRUITMENTS),
        }
    }

    pub async fn list(
        &self,
        active: Option<bool>,
        limit: Option<i64>,
    ) -> AppResult<Vec<Recruitment>> {
        self.base.list(active, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Recruitment> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle_active(&self, id: i32) -> AppResult<bool> {
        self.base.toggle(id, ToggleFlag::Active).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<Recruitment>> {
        self.base.search(term, active).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    /// Active announcements whose validity window has not closed
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Recruitment>> {
        let mut sql = String::from(
            "SELECT * FROM recruitments WHERE is_active = TRUE AND valid_until >= CURRENT_DATE \
             ORDER BY published_date DESC, id DESC",
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $1");
        }
        let mut query = sqlx::query_as::<_, Recruitment>(&sql);
        if let Some(l) = limit {
            query = query.bind(l);
        }
        let rows = query.fetch_all(self.base.pool()).await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &CreateRecruitment) -> AppResult<Recruitment> {
        let published_date = parse_date(&data.published_date, "published_date")?;
        let valid_until = parse_date(&data.valid_until, "valid_until")?;

        let row = sqlx::query_as::<_, Recruitment>(
            r#"
            INSERT INTO recruitments (heading, subheading, published_date, valid_until, document_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.heading)
        .bind(&data.subheading)
        .bind(published_date)
        .bind(valid_until)
        .bind(&data.document_url)
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateRecruitment) -> AppResult<Recruitment> {
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

        let query = format!(
            "UPDATE recruitments SET {} WHERE id = ${} RETURNING *",
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

        let mut builder = sqlx::query_as::<_, Recruitment>(&query);

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

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recruitment {} not found", id)))
    }
}
