//! Workbook transcription for the task import/export surface.
//!
//! Import reads rows after the header row with a fixed column-to-field
//! mapping; export and the import echo write the same flat shape back
//! out with `rust_xlsxwriter`.

use std::io::Cursor;

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use domain::models::{Zadatak, ZadatakPayload};
use rust_xlsxwriter::Workbook;
use thiserror::Error;

/// MIME type for `.xlsx` responses.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Status marker written next to each echoed row of a successful import.
const IMPORT_STATUS_OK: &str = "Dodan";

/// Import columns, in sheet order after the header row.
const IMPORT_HEADERS: [&str; 5] = ["Naslov", "Opis", "PlanPocetak", "PlanKraj", "Prioritet"];

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("workbook could not be read: {0}")]
    Workbook(String),

    #[error("workbook contains no worksheets")]
    NoSheet,

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("workbook could not be written: {0}")]
    Write(String),
}

/// Parse an uploaded `.xlsx` workbook into task payloads.
///
/// The first worksheet is read; its first row is a header and is
/// skipped, as are fully empty rows. Any malformed cell aborts the whole
/// parse with the sheet row number in the error.
pub fn parse_zadatak_workbook(bytes: &[u8]) -> Result<Vec<ZadatakPayload>, SpreadsheetError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| SpreadsheetError::Workbook(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoSheet)?
        .map_err(|e| SpreadsheetError::Workbook(e.to_string()))?;

    let mut payloads = Vec::new();
    for (idx, row) in range.rows().enumerate().skip(1) {
        // Sheet rows are 1-based and the header occupies row 1.
        let row_no = idx + 1;

        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let naslov = text_cell(row, 0).ok_or_else(|| row_error(row_no, "missing task title"))?;
        let opis = text_cell(row, 1);
        let plan_pocetak =
            date_cell(row, 2).ok_or_else(|| row_error(row_no, "invalid planned start date"))?;
        let plan_kraj =
            date_cell(row, 3).ok_or_else(|| row_error(row_no, "invalid planned end date"))?;
        let prioritet = int_cell(row, 4).ok_or_else(|| row_error(row_no, "invalid priority"))?;

        payloads.push(ZadatakPayload {
            id_zadatka: None,
            naslov,
            opis,
            plan_pocetak,
            plan_kraj,
            prioritet,
            id_osobe: None,
        });
    }

    Ok(payloads)
}

/// Build the import response: the created rows echoed back with their
/// assigned ids and a trailing status column.
pub fn write_import_result(zadaci: &[Zadatak]) -> Result<Vec<u8>, SpreadsheetError> {
    write_workbook(zadaci, Some(IMPORT_STATUS_OK))
}

/// Build the full task export workbook.
pub fn write_zadatak_export(zadaci: &[Zadatak]) -> Result<Vec<u8>, SpreadsheetError> {
    write_workbook(zadaci, None)
}

fn write_workbook(zadaci: &[Zadatak], status: Option<&str>) -> Result<Vec<u8>, SpreadsheetError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let write = |e: rust_xlsxwriter::XlsxError| SpreadsheetError::Write(e.to_string());

    let mut headers = vec!["IdZadatka"];
    headers.extend(IMPORT_HEADERS);
    headers.push(if status.is_some() { "Status" } else { "Nositelj" });
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(write)?;
    }

    for (i, zadatak) in zadaci.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet
            .write_number(row, 0, zadatak.id_zadatka as f64)
            .map_err(write)?;
        sheet.write_string(row, 1, &zadatak.naslov).map_err(write)?;
        if let Some(opis) = &zadatak.opis {
            sheet.write_string(row, 2, opis).map_err(write)?;
        }
        sheet
            .write_string(row, 3, zadatak.plan_pocetak.format("%Y-%m-%d").to_string())
            .map_err(write)?;
        sheet
            .write_string(row, 4, zadatak.plan_kraj.format("%Y-%m-%d").to_string())
            .map_err(write)?;
        sheet
            .write_number(row, 5, zadatak.prioritet as f64)
            .map_err(write)?;
        match status {
            Some(status) => {
                sheet.write_string(row, 6, status).map_err(write)?;
            }
            None => {
                if let Some(nositelj) = &zadatak.nositelj {
                    sheet.write_string(row, 6, nositelj).map_err(write)?;
                }
            }
        }
    }

    workbook.save_to_buffer().map_err(write)
}

fn row_error(row: usize, message: &str) -> SpreadsheetError {
    SpreadsheetError::Row {
        row,
        message: message.to_string(),
    }
}

fn text_cell(row: &[Data], idx: usize) -> Option<String> {
    match row.get(idx)? {
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

fn date_cell(row: &[Data], idx: usize) -> Option<NaiveDate> {
    let cell = row.get(idx)?;
    match cell {
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell.as_date(),
        _ => None,
    }
}

fn int_cell(row: &[Data], idx: usize) -> Option<i32> {
    match row.get(idx)? {
        Data::Int(i) => Some(*i as i32),
        // Excel stores numbers as floats.
        Data::Float(f) => Some(*f as i32),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Build an input workbook the way a client would fill the template.
    fn input_workbook(rows: &[(&str, &str, &str, &str, i32)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in IMPORT_HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (i, (naslov, opis, pocetak, kraj, prioritet)) in rows.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, *naslov).unwrap();
            if !opis.is_empty() {
                sheet.write_string(row, 1, *opis).unwrap();
            }
            sheet.write_string(row, 2, *pocetak).unwrap();
            sheet.write_string(row, 3, *kraj).unwrap();
            sheet.write_number(row, 4, *prioritet as f64).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_parse_round_trip() {
        let bytes = input_workbook(&[
            ("Prvi", "opis", "2024-01-01", "2024-02-01", 1),
            ("Drugi", "", "2024-03-01", "2024-04-01", 3),
        ]);

        let payloads = parse_zadatak_workbook(&bytes).unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[0].naslov, "Prvi");
        assert_eq!(payloads[0].opis.as_deref(), Some("opis"));
        assert_eq!(payloads[0].plan_pocetak, date(2024, 1, 1));
        assert_eq!(payloads[0].plan_kraj, date(2024, 2, 1));
        assert_eq!(payloads[0].prioritet, 1);
        assert_eq!(payloads[1].naslov, "Drugi");
        assert_eq!(payloads[1].opis, None);
        assert_eq!(payloads[1].prioritet, 3);
    }

    #[test]
    fn test_parse_rejects_garbage_bytes() {
        let result = parse_zadatak_workbook(b"definitely not a zip archive");
        assert!(matches!(result, Err(SpreadsheetError::Workbook(_))));
    }

    #[test]
    fn test_parse_reports_row_number_for_bad_date() {
        let bytes = input_workbook(&[
            ("Prvi", "", "2024-01-01", "2024-02-01", 1),
            ("Drugi", "", "not-a-date", "2024-04-01", 2),
        ]);

        let err = parse_zadatak_workbook(&bytes).unwrap_err();
        match err {
            SpreadsheetError::Row { row, message } => {
                assert_eq!(row, 3);
                assert!(message.contains("start date"));
            }
            other => panic!("Expected row error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_title() {
        let bytes = input_workbook(&[("", "", "2024-01-01", "2024-02-01", 1)]);
        // An all-but-empty row still carries dates, so it is not skipped.
        let err = parse_zadatak_workbook(&bytes).unwrap_err();
        assert!(matches!(err, SpreadsheetError::Row { row: 2, .. }));
    }

    #[test]
    fn test_import_result_echoes_rows_with_status() {
        let zadaci = vec![Zadatak {
            id_zadatka: 42,
            naslov: "Prvi".to_string(),
            opis: None,
            plan_pocetak: date(2024, 1, 1),
            plan_kraj: date(2024, 2, 1),
            prioritet: 1,
            id_osobe: None,
            nositelj: None,
        }];

        let bytes = write_import_result(&zadaci).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(bytes.as_slice())).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<_> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][6], Data::String("Status".to_string()));
        assert_eq!(rows[1][0], Data::Float(42.0));
        assert_eq!(rows[1][1], Data::String("Prvi".to_string()));
        assert_eq!(rows[1][6], Data::String(IMPORT_STATUS_OK.to_string()));
    }

    #[test]
    fn test_export_includes_assignee_column() {
        let zadaci = vec![Zadatak {
            id_zadatka: 1,
            naslov: "Prvi".to_string(),
            opis: Some("opis".to_string()),
            plan_pocetak: date(2024, 1, 1),
            plan_kraj: date(2024, 2, 1),
            prioritet: 2,
            id_osobe: Some(9),
            nositelj: Some("Ana Anić".to_string()),
        }];

        let bytes = write_zadatak_export(&zadaci).unwrap();

        let mut workbook = Xlsx::new(Cursor::new(bytes.as_slice())).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let rows: Vec<_> = range.rows().collect();
        assert_eq!(rows[0][6], Data::String("Nositelj".to_string()));
        assert_eq!(rows[1][6], Data::String("Ana Anić".to_string()));
    }

    #[test]
    fn test_export_and_import_shapes_share_columns() {
        // Export output (minus the trailing column) is a valid import.
        let zadaci = vec![Zadatak {
            id_zadatka: 5,
            naslov: "Prvi".to_string(),
            opis: None,
            plan_pocetak: date(2024, 1, 1),
            plan_kraj: date(2024, 2, 1),
            prioritet: 1,
            id_osobe: None,
            nositelj: None,
        }];
        let bytes = write_import_result(&zadaci).unwrap();
        let mut workbook = Xlsx::new(Cursor::new(bytes.as_slice())).unwrap();
        let range = workbook.worksheet_range_at(0).unwrap().unwrap();
        let header: Vec<_> = range.rows().next().unwrap().to_vec();
        for (i, expected) in IMPORT_HEADERS.iter().enumerate() {
            assert_eq!(header[i + 1], Data::String(expected.to_string()));
        }
    }
}
