use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::task::spawn_blocking;
use umya_spreadsheet::{new_file, writer, Worksheet};

use crate::error::ExportError;
use crate::schedule::{Record, Selection};

const HEADERS: [&str; 7] = [
    "Регион",
    "Район",
    "Учреждение",
    "Звено",
    "День",
    "Сеанс",
    "Ответственный",
];

/// Human-readable description of the active filters, e.g. for a report title.
pub fn describe(selection: &Selection) -> String {
    let or_all = |value: &str| {
        if value.trim().is_empty() {
            "все".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "Регион: {}; Район: {}; Учреждение: {}; Поиск: {}",
        or_all(selection.region()),
        or_all(selection.district()),
        or_all(selection.institution()),
        or_all(selection.search()),
    )
}

fn write_row(sheet: &mut Worksheet, row: u32, values: &[&str]) {
    for (col, value) in (1u32..).zip(values) {
        sheet.get_cell_mut((col, row)).set_value(*value);
    }
}

/// Writes `records` to `<dir>/schedule_<timestamp>.xlsx` and returns the path.
pub fn write_report(records: &[Record], summary: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let filename = format!("schedule_{}.xlsx", Local::now().format("%Y-%m-%d_%H-%M-%S"));
    let output_path = dir.join(filename);

    let mut book = new_file();
    let sheet = book
        .get_sheet_by_name_mut("Sheet1")
        .ok_or(ExportError::MissingSheet)?;

    sheet
        .get_cell_mut((1u32, 1u32))
        .set_value("График обучения сотрудников по системе DMED");
    sheet.get_cell_mut((1u32, 2u32)).set_value(summary);
    write_row(sheet, 4, &HEADERS);

    for (row, record) in (5u32..).zip(records) {
        write_row(
            sheet,
            row,
            &[
                record.region.as_str(),
                record.district.as_str(),
                record.institution.as_str(),
                record.level.as_str(),
                record.day.as_str(),
                record.session.as_str(),
                record.responsible.as_str(),
            ],
        );
    }

    writer::xlsx::write(&book, &output_path).map_err(|e| ExportError::Spreadsheet {
        reason: e.to_string(),
    })?;
    tracing::info!("Exported {} rows to {}", records.len(), output_path.display());
    Ok(output_path)
}

pub async fn export(records: Vec<Record>, summary: String, dir: PathBuf) -> Result<PathBuf, String> {
    spawn_blocking(move || write_report(&records, &summary, &dir).map_err(|e| e.to_string()))
        .await
        .unwrap_or_else(|join_err| Err(format!("Ошибка выполнения задачи экспорта: {:?}", join_err)))
}
