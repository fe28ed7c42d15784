//! Audit log viewing route.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use domain::models::LogEntry;
use persistence::repositories::LogEntryRepository;
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub date: Option<NaiveDate>,
}

/// Audit entries for one calendar date (UTC), newest first.
///
/// GET /logging?date=YYYY-MM-DD
pub async fn list_by_date(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let date = query
        .date
        .ok_or_else(|| ApiError::Validation("date query parameter is required".to_string()))?;

    let repo = LogEntryRepository::new(state.pool.clone());
    let entries = repo.list_by_date(date).await?;
    Ok(Json(entries))
}
