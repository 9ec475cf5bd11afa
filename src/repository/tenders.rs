//! Tenders repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::tender::{CreateTender, Tender, UpdateTender},
};

use super::base::{parse_date, BaseRepository, TableSpec, ToggleFlag};

// Tender numbers are searchable alongside the usual text fields
const TENDERS: TableSpec = TableSpec {
    table: "tenders",
    search_columns: &["heading", "description", "tender_no"],
    order_by: "published_date DESC, id DESC",
};

#[derive(Clone)]
pub struct TendersRepository {
    base: BaseRepository<Tender>,
}

impl TendersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            base: BaseRepository::new(pool, TENDERS),
        }
    }

    pub async fn list(&self, active: Option<bool>, limit: Option<i64>) -> AppResult<Vec<Tender>> {
        self.base.list(active, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Tender> {
        self.base.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }

    pub async fn toggle(&self, id: i32, flag: ToggleFlag) -> AppResult<bool> {
        self.base.toggle(id, flag).await
    }

    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<Tender>> {
        self.base.search(term, active).await
    }

    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<Tender>> {
        self.base.featured(limit).await
    }

    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        self.base.count(active).await
    }

    /// Active tenders whose bid submission window is still open
    pub async fn list_active(&self, limit: Option<i64>) -> AppResult<Vec<Tender>> {
        let mut sql = String::from(
            "SELECT * FROM tenders WHERE is_active = TRUE AND last_date >= CURRENT_DATE \
             ORDER BY published_date DESC, id DESC",
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $1");
        }
        let mut query = sqlx::query_as::<_, Tender>(&sql);
        if let Some(l) = limit {
            query = query.bind(l);
        }
        let rows = query.fetch_all(self.base.pool()).await?;
        Ok(rows)
    }

    /// Create a tender
    pub async fn create(&self, data: &CreateTender) -> AppResult<Tender> {
        let published_date = parse_date(&data.published_date, "published_date")?;
        let last_date = parse_date(&data.last_date, "last_date")?;
        let opening_date = parse_date(&data.opening_date, "opening_date")?;

        let row = sqlx::query_as::<_, Tender>(
            r#"
            INSERT INTO tenders (
                heading, description, published_date, last_date, opening_date,
                tender_no, document_url, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.heading)
        .bind(&data.description)
        .bind(published_date)
        .bind(last_date)
        .bind(opening_date)
        .bind(&data.tender_no)
        .bind(&data.document_url)
        .bind(data.featured.unwrap_or(false))
        .fetch_one(self.base.pool())
        .await?;
        Ok(row)
    }

    /// Update a tender (partial merge, stamps updated_at)
    pub async fn update(&self, id: i32, data: &UpdateTender) -> AppResult<Tender> {
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
        add_f!(data.published_date, "published_date");
        add_f!(data.last_date, "last_date");
        add_f!(data.opening_date, "opening_date");
        add_f!(data.tender_no, "tender_no");
        add_f!(data.document_url, "document_url");
        add_f!(data.featured, "featured");

        let query = format!(
            "UPDATE tenders SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let published_date = match &data.published_date {
            Some(s) => Some(parse_date(s, "published_date")?),
            None => None,
        };
        let last_date = match &data.last_date {
            Some(s) => Some(parse_date(s, "last_date")?),
            None => None,
        };
        let opening_date = match &data.opening_date {
            Some(s) => Some(parse_date(s, "opening_date")?),
            None => None,
        };

        let mut builder = sqlx::query_as::<_, Tender>(&query);

        macro_rules! bind_f {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_f!(data.heading);
        bind_f!(data.description);
        if let Some(d) = published_date {
            builder = builder.bind(d);
        }
        if let Some(d) = last_date {
            builder = builder.bind(d);
        }
        if let Some(d) = opening_date {
            builder = builder.bind(d);
        }
        bind_f!(data.tender_no);
        bind_f!(data.document_url);
        bind_f!(data.featured);

        builder
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tender {} not found", id)))
    }
}
