//! Sources of schedule records: the bundled roster, JSON files and `.xlsx`
//! spreadsheets. Everything here yields raw rows; normalization happens when
//! they are turned into a `RecordStore`.

use std::fs;
use std::path::{Path, PathBuf};

use tokio::task::spawn_blocking;
use umya_spreadsheet::{reader, Worksheet};

use crate::error::DatasetError;
use crate::schedule::RawRecord;

const BUNDLED: &str = include_str!("../assets/schedule.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Region,
    District,
    Institution,
    Level,
    Day,
    Session,
    Responsible,
}

const FIELDS: [Field; 7] = [
    Field::Region,
    Field::District,
    Field::Institution,
    Field::Level,
    Field::Day,
    Field::Session,
    Field::Responsible,
];

fn header_field(name: &str) -> Option<Field> {
    match name.trim().to_lowercase().as_str() {
        "регион" | "region" => Some(Field::Region),
        "район" | "district" => Some(Field::District),
        "учреждение" | "institution" => Some(Field::Institution),
        "звено" | "level" => Some(Field::Level),
        "день" | "day" => Some(Field::Day),
        "сеанс" | "session" => Some(Field::Session),
        "ответственный" | "responsible" => Some(Field::Responsible),
        _ => None,
    }
}

pub fn bundled() -> Result<Vec<RawRecord>, DatasetError> {
    Ok(serde_json::from_str(BUNDLED)?)
}

pub fn read_file(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        Some("xlsx") => read_xlsx(path),
        _ => Err(DatasetError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads the first worksheet. Row 1 is the header; columns are matched by
/// name, or taken in field order when no header name is recognised.
pub fn read_xlsx(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let book = reader::xlsx::read(path).map_err(|e| DatasetError::Spreadsheet {
        reason: e.to_string(),
    })?;
    let sheet = book
        .get_sheet_collection()
        .first()
        .ok_or(DatasetError::NoWorksheet)?;
    Ok(rows_from_sheet(sheet))
}

fn rows_from_sheet(sheet: &Worksheet) -> Vec<RawRecord> {
    let mut columns: [Option<u32>; 7] = [None; 7];
    for col in 1..=sheet.get_highest_column() {
        if let Some(field) = header_field(&sheet.get_value((col, 1u32))) {
            let slot = &mut columns[field as usize];
            if slot.is_none() {
                *slot = Some(col);
            }
        }
    }
    if columns.iter().all(Option::is_none) {
        tracing::debug!("No recognised header row, reading columns by position");
        for (index, slot) in (1u32..).zip(columns.iter_mut()) {
            *slot = Some(index);
        }
    }

    let mut rows = Vec::new();
    for row in 2..=sheet.get_highest_row() {
        let [region, district, institution, level, day, session, responsible] = FIELDS.map(|field| {
            columns[field as usize]
                .map(|col| sheet.get_value((col, row)))
                .filter(|value| !value.trim().is_empty())
        });
        let raw = RawRecord {
            region,
            district,
            institution,
            level,
            day,
            session,
            responsible,
        };
        if raw != RawRecord::default() {
            rows.push(raw);
        }
    }
    rows
}

/// Loads the configured dataset, or the bundled roster when none is set.
pub async fn load(path: Option<PathBuf>) -> Result<Vec<RawRecord>, String> {
    spawn_blocking(move || -> Result<Vec<RawRecord>, String> {
        let rows = match &path {
            Some(path) => read_file(path),
            None => bundled(),
        }
        .map_err(|e| e.to_string())?;
        match &path {
            Some(path) => tracing::info!("Loaded {} rows from {}", rows.len(), path.display()),
            None => tracing::info!("Loaded {} rows from bundled roster", rows.len()),
        }
        Ok(rows)
    })
    .await
    .unwrap_or_else(|join_err| Err(format!("Ошибка выполнения задачи загрузки: {:?}", join_err)))
}

/// Asks the user for a spreadsheet and reads it. `Ok(None)` means the dialog
/// was cancelled.
pub async fn pick_and_import() -> Result<Option<(PathBuf, Vec<RawRecord>)>, String> {
    spawn_blocking(|| -> Result<Option<(PathBuf, Vec<RawRecord>)>, String> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Таблица", &["xlsx", "json"])
            .pick_file()
        else {
            return Ok(None);
        };
        let rows = read_file(&path).map_err(|e| e.to_string())?;
        tracing::info!("Imported {} rows from {}", rows.len(), path.display());
        Ok(Some((path, rows)))
    })
    .await
    .unwrap_or_else(|join_err| Err(format!("Ошибка выполнения задачи импорта: {:?}", join_err)))
}
