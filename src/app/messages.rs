use std::path::PathBuf;

use crate::schedule::RawRecord;

#[derive(Debug, Clone)]
pub enum Message {
    GoToSchedule,
    GoToSettings,
    //
    DatasetLoaded(Result<Vec<RawRecord>, String>),
    //
    RegionSelected(String),
    RegionCleared,
    DistrictSelected(String),
    DistrictCleared,
    InstitutionSelected(String),
    InstitutionCleared,
    SearchChanged(String),
    ResetFilters,
    //
    PreviousPage,
    NextPage,
    PageInputChanged(String),
    PageInputSubmitted,
    //
    ImportPressed,
    ImportFinished(Result<Option<(PathBuf, Vec<RawRecord>)>, String>),
    ExportPressed,
    ExportFinished(Result<PathBuf, String>),
    //
    ThemeToggled(bool),
    Saved(Result<(), String>),
}
