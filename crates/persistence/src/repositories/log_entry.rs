//! Audit log repository for database operations.

use chrono::{NaiveDate, TimeDelta};
use domain::models::{LogEntry, NewLogEntry};
use sqlx::{PgPool, Postgres, Transaction};

use crate::entities::LogEntryEntity;

/// Appends an audit entry inside an already-open transaction.
///
/// Called by the resource repositories so the audit row commits together
/// with the mutation it describes.
pub(crate) async fn insert_entry(
    tx: &mut Transaction<'_, Postgres>,
    entry: &NewLogEntry,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO log_entries (action, controller, level, message, url)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&entry.action)
    .bind(&entry.controller)
    .bind(&entry.level)
    .bind(&entry.message)
    .bind(&entry.url)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

/// Repository for reading the append-only audit log.
#[derive(Clone)]
pub struct LogEntryRepository {
    pool: PgPool,
}

impl LogEntryRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All entries whose timestamp falls on the given calendar date
    /// (UTC), newest first.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<LogEntry>, sqlx::Error> {
        let day_start = date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc();
        let day_end = day_start + TimeDelta::days(1);

        let entities = sqlx::query_as::<_, LogEntryEntity>(
            r#"
            SELECT id, timestamp, action, controller, level, message, url
            FROM log_entries
            WHERE timestamp >= $1 AND timestamp < $2
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .bind(day_start)
        .bind(day_end)
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }
}
