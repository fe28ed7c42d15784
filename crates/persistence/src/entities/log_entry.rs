//! Audit log entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::LogEntry;
use sqlx::FromRow;

/// Database row mapping for the `log_entries` table.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntryEntity {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub controller: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub url: Option<String>,
}

impl From<LogEntryEntity> for LogEntry {
    fn from(entity: LogEntryEntity) -> Self {
        Self {
            id: entity.id,
            timestamp: entity.timestamp,
            action: entity.action,
            controller: entity.controller,
            level: entity.level,
            message: entity.message,
            url: entity.url,
        }
    }
}
