//! Daily visitor counter repository
//!
//! One row per calendar day with the distinct IPs seen that day. Recording a
//! visit is a single conditional upsert so concurrent hits from the same IP
//! cannot double-count.

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::visitor::VisitorDayCount};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a visit from `ip` for today.
    ///
    /// Creates today's row on first visit, increments and appends the IP on a
    /// first visit from a new IP, and is a no-op for an already-seen IP.
    /// Returns today's count after the call.
    pub async fn record_visit(&self, ip: &str) -> AppResult<i32> {
        let updated: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO visitor_days (day, count, ips)
            VALUES (CURRENT_DATE, 1, ARRAY[$1])
            ON CONFLICT (day) DO UPDATE
            SET count = visitor_days.count + 1,
                ips = array_append(visitor_days.ips, $1),
                updated_at = NOW()
            WHERE NOT ($1 = ANY(visitor_days.ips))
            RETURNING count
            "#,
        )
        .bind(ip)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(count) => Ok(count),
            // IP already counted today; the upsert matched nothing
            None => self.today().await,
        }
    }

    /// Today's visitor count (zero if no row exists yet)
    pub async fn today(&self) -> AppResult<i32> {
        let count: Option<i32> =
            sqlx::query_scalar("SELECT count FROM visitor_days WHERE day = CURRENT_DATE")
                .fetch_optional(&self.pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Sum of counts across all recorded days
    pub async fn total(&self) -> AppResult<i64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(count), 0)::bigint FROM visitor_days")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Per-day counts for the last `days` days, ascending by date
    pub async fn stats(&self, days: i32) -> AppResult<Vec<VisitorDayCount>> {
        let rows = sqlx::query_as::<_, VisitorDayCount>(
            r#"
            SELECT day, count FROM visitor_days
            WHERE day >= CURRENT_DATE - ($1 - 1)
            ORDER BY day ASC
            "#,
        )
        .bind(days)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
