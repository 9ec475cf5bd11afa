//! Generic repository over one content table
//!
//! Every content entity shares the same surface: list with optional
//! active-filter and cap, get-by-id, delete, atomic flag toggles, substring
//! search over a fixed set of text columns, and a featured list. The
//! per-table differences (name, searchable columns, default ordering) are
//! composed in through [`TableSpec`] rather than inherited.

use std::fmt::Write as _;
use std::marker::PhantomData;

use chrono::NaiveDate;
use sqlx::{postgres::PgRow, FromRow, Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Per-table configuration composed into the generic repository
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    /// Text columns matched by substring search
    pub search_columns: &'static [&'static str],
    /// Default ORDER BY clause for lists and searches
    pub order_by: &'static str,
}

/// Boolean columns flipped by the toggle endpoints
#[derive(Debug, Clone, Copy)]
pub enum ToggleFlag {
    Active,
    Featured,
}

impl ToggleFlag {
    pub fn column(self) -> &'static str {
        match self {
            ToggleFlag::Active => "is_active",
            ToggleFlag::Featured => "featured",
        }
    }
}

/// Escape LIKE metacharacters and wrap the term for substring matching
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{}%", escaped)
}

/// Parse a YYYY-MM-DD request field
pub(crate) fn parse_date(s: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {}", field)))
}

pub struct BaseRepository<T> {
    pool: Pool<Postgres>,
    spec: TableSpec,
    _row: PhantomData<fn() -> T>,
}

// Manual impl: T itself is never stored, so no T: Clone bound is needed
impl<T> Clone for BaseRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            spec: self.spec,
            _row: PhantomData,
        }
    }
}

impl<T> BaseRepository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(pool: Pool<Postgres>, spec: TableSpec) -> Self {
        Self {
            pool,
            spec,
            _row: PhantomData,
        }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    /// List records in the table's default order, optionally filtered by
    /// is_active and capped
    pub async fn list(&self, active: Option<bool>, limit: Option<i64>) -> AppResult<Vec<T>> {
        let mut sql = format!("SELECT * FROM {}", self.spec.table);
        if active.is_some() {
            sql.push_str(" WHERE is_active = $1");
        }
        let _ = write!(sql, " ORDER BY {}", self.spec.order_by);
        if limit.is_some() {
            let idx = if active.is_some() { 2 } else { 1 };
            let _ = write!(sql, " LIMIT ${}", idx);
        }

        let mut query = sqlx::query_as::<_, T>(&sql);
        if let Some(a) = active {
            query = query.bind(a);
        }
        if let Some(l) = limit {
            query = query.bind(l);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<T> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.spec.table);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", self.spec.table, id)))
    }

    /// Hard delete a record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.spec.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                self.spec.table, id
            )));
        }
        Ok(())
    }

    /// Flip a boolean flag in a single statement and return the new value.
    ///
    /// Deliberately one round trip: two concurrent toggles both apply
    /// instead of collapsing into a single lost flip.
    pub async fn toggle(&self, id: i32, flag: ToggleFlag) -> AppResult<bool> {
        let col = flag.column();
        let sql = format!(
            "UPDATE {} SET {col} = NOT {col}, updated_at = NOW() WHERE id = $1 RETURNING {col}",
            self.spec.table
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", self.spec.table, id)))
    }

    /// Case-insensitive substring search over the table's text columns.
    ///
    /// Not filtered by any expiry date: expired-but-active records remain
    /// findable, matching the public site's behaviour.
    pub async fn search(&self, term: &str, active: Option<bool>) -> AppResult<Vec<T>> {
        let matches: Vec<String> = self
            .spec
            .search_columns
            .iter()
            .map(|c| format!("{} ILIKE $1", c))
            .collect();
        let mut sql = format!(
            "SELECT * FROM {} WHERE ({})",
            self.spec.table,
            matches.join(" OR ")
        );
        if active.is_some() {
            sql.push_str(" AND is_active = $2");
        }
        let _ = write!(sql, " ORDER BY {}", self.spec.order_by);

        let mut query = sqlx::query_as::<_, T>(&sql).bind(like_pattern(term));
        if let Some(a) = active {
            query = query.bind(a);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// List featured, active records, optionally capped
    pub async fn featured(&self, limit: Option<i64>) -> AppResult<Vec<T>> {
        let mut sql = format!(
            "SELECT * FROM {} WHERE featured = TRUE AND is_active = TRUE ORDER BY {}",
            self.spec.table, self.spec.order_by
        );
        if limit.is_some() {
            sql.push_str(" LIMIT $1");
        }

        let mut query = sqlx::query_as::<_, T>(&sql);
        if let Some(l) = limit {
            query = query.bind(l);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Count records, optionally restricted to active ones
    pub async fn count(&self, active: Option<bool>) -> AppResult<i64> {
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.spec.table);
        if active.is_some() {
            sql.push_str(" WHERE is_active = $1");
        }
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(a) = active {
            query = query.bind(a);
        }
        let total = query.fetch_one(&self.pool).await?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_plain_terms() {
        assert_eq!(like_pattern("notice"), "%notice%");
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert!(parse_date("2024-06-01", "published_date").is_ok());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        let err = parse_date("01/06/2024", "valid_until").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn toggle_flag_columns() {
        assert_eq!(ToggleFlag::Active.column(), "is_active");
        assert_eq!(ToggleFlag::Featured.column(), "featured");
    }
}
