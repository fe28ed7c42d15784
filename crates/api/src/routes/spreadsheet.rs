//! Spreadsheet import/export routes for tasks.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use domain::models::NewLogEntry;
use persistence::repositories::ZadatakRepository;
use shared::load_params::LoadParams;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::spreadsheet::{
    parse_zadatak_workbook, write_import_result, write_zadatak_export, XLSX_CONTENT_TYPE,
};

/// Create spreadsheet routes, mounted under the task resource.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import", post(import_zadaci))
        .route("/export", get(export_zadaci))
}

/// Bulk-import tasks from an uploaded workbook.
///
/// POST /zadatak/import (multipart, one file field)
///
/// Rows after the header row map positionally to
/// (Naslov, Opis, PlanPocetak, PlanKraj, Prioritet). The whole batch is
/// inserted in a single transaction; any parse, validation, or storage
/// failure aborts the import with nothing persisted. The response echoes
/// the imported rows as a workbook with an added status column.
async fn import_zadaci(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.file_name().is_some() || field.name() == Some("file") {
            file_bytes = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Could not read upload: {e}")))?,
            );
            break;
        }
    }
    let bytes = file_bytes.ok_or_else(|| ApiError::Validation("No file uploaded".to_string()))?;

    let payloads = parse_zadatak_workbook(&bytes)
        .map_err(|e| ApiError::Validation(format!("Import failed: {e}")))?;
    for payload in &payloads {
        payload.validate()?;
    }

    let audit = NewLogEntry::action(format!("Imported {} tasks", payloads.len()))
        .controller("zadatak")
        .url("/zadatak/import");
    let repo = ZadatakRepository::new(state.pool.clone());
    let created = repo.import(&payloads, audit).await?;

    info!(count = created.len(), "Task import completed");

    let output = write_import_result(&created)
        .map_err(|e| ApiError::Internal(format!("Could not build result workbook: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"zadaci-import.xlsx\"".to_string(),
            ),
        ],
        output,
    ))
}

/// Export all tasks as a workbook.
///
/// GET /zadatak/export
async fn export_zadaci(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = ZadatakRepository::new(state.pool.clone());
    let zadaci = repo.list(&LoadParams::all()).await?;

    let output = write_zadatak_export(&zadaci)
        .map_err(|e| ApiError::Internal(format!("Could not build export workbook: {e}")))?;

    info!(count = zadaci.len(), "Task export generated");

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"zadaci.xlsx\"".to_string(),
            ),
        ],
        output,
    ))
}
