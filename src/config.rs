use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page of the schedule table.
    pub page_size: NonZeroUsize,
    /// Remember region/district/institution between runs.
    pub persist_selection: bool,
    pub storage: StorageBackend,
    pub storage_path: PathBuf,
    /// `.json` or `.xlsx` roster to load instead of the bundled one.
    pub dataset_path: Option<PathBuf>,
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            persist_selection: true,
            storage: StorageBackend::Json,
            storage_path: PathBuf::from("session.json"),
            dataset_path: None,
            export_dir: PathBuf::from("reports"),
        }
    }
}

pub fn load_config() -> Config {
    load_config_from(Path::new(CONFIG_FILE))
}

pub fn load_config_from(path: &Path) -> Config {
    let Ok(contents) = fs::read_to_string(path) else {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Config::default();
    };
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
        Config::default()
    })
}
