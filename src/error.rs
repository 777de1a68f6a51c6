//! Error types for the I/O around the schedule engine.
//!
//! The engine itself has no fatal conditions. These errors come from loading
//! datasets, durable storage and spreadsheet export. When one has to travel
//! through an `iced::Task` it is rendered to a `String` first, since messages
//! must be `Clone`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed storage file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read spreadsheet: {reason}")]
    Spreadsheet { reason: String },

    #[error("Spreadsheet has no worksheets")]
    NoWorksheet,

    #[error("Unsupported dataset format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to prepare export directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write spreadsheet: {reason}")]
    Spreadsheet { reason: String },

    #[error("Workbook has no default sheet")]
    MissingSheet,
}
