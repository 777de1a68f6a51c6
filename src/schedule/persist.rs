//! Saving and restoring the hierarchy selection.
//!
//! Search text is not persisted. A stored value is only restored when it still
//! fits the cascade of the freshly loaded records; an orphaned district or
//! institution is dropped without complaint.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::spawn_blocking;

use super::cascade::{district_options, institution_options, region_options};
use super::record::Record;
use super::selection::Selection;
use crate::storage::KeyValueStore;

pub const REGION_KEY: &str = "selectedRegion";
pub const DISTRICT_KEY: &str = "selectedDistrict";
pub const INSTITUTION_KEY: &str = "selectedInstitution";

pub fn entries(selection: &Selection) -> Vec<(&'static str, String)> {
    vec![
        (REGION_KEY, selection.region().to_string()),
        (DISTRICT_KEY, selection.district().to_string()),
        (INSTITUTION_KEY, selection.institution().to_string()),
    ]
}

fn read(store: &dyn KeyValueStore, key: &str) -> String {
    match store.get(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", key, e);
            String::new()
        }
    }
}

pub fn restore(store: &dyn KeyValueStore, records: &[Record]) -> Selection {
    let mut stored = Selection::default();
    stored.set_region(read(store, REGION_KEY));
    stored.set_district(read(store, DISTRICT_KEY));
    stored.set_institution(read(store, INSTITUTION_KEY));
    validated(&stored, records)
}

/// Keeps the longest prefix of the hierarchy that still exists in `records`.
/// Search text is carried over unchanged.
pub fn validated(selection: &Selection, records: &[Record]) -> Selection {
    let mut valid = Selection::default();
    valid.set_search(selection.search());

    let region = selection.region();
    if region.is_empty() {
        return valid;
    }
    if !region_options(records).iter().any(|r| r == region) {
        tracing::debug!("Discarding unknown region {:?}", region);
        return valid;
    }
    valid.set_region(region);

    let district = selection.district();
    if district.is_empty() {
        return valid;
    }
    if !district_options(records, region).iter().any(|d| d == district) {
        tracing::debug!("Discarding district {:?} not found under {:?}", district, region);
        return valid;
    }
    valid.set_district(district);

    let institution = selection.institution();
    if institution.is_empty() {
        return valid;
    }
    if !institution_options(records, region, district)
        .iter()
        .any(|i| i == institution)
    {
        tracing::debug!(
            "Discarding institution {:?} not found under {:?} / {:?}",
            institution,
            region,
            district
        );
        return valid;
    }
    valid.set_institution(institution);
    valid
}

/// Background writer for a shared store.
///
/// Every save gets a revision when it is requested. A key is only written if
/// no later revision has already reached it, so a slow save finishing after a
/// newer one cannot bring back an older value.
pub struct Writer {
    store: Arc<dyn KeyValueStore>,
    issued: AtomicU64,
    written: Mutex<HashMap<&'static str, u64>>,
}

impl Writer {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            issued: AtomicU64::new(0),
            written: Mutex::new(HashMap::new()),
        }
    }

    /// Writes `entries` off the UI thread. Failures are reported, never retried.
    pub fn save(
        self: &Arc<Self>,
        entries: Vec<(&'static str, String)>,
    ) -> impl Future<Output = Result<(), String>> + Send + 'static {
        let revision = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let writer = Arc::clone(self);
        async move {
            spawn_blocking(move || writer.write(revision, &entries))
                .await
                .unwrap_or_else(|join_err| Err(format!("Storage task failed: {}", join_err)))
        }
    }

    fn write(&self, revision: u64, entries: &[(&'static str, String)]) -> Result<(), String> {
        let mut written = self
            .written
            .lock()
            .map_err(|_| "Storage writer lock poisoned".to_string())?;

        let fresh: Vec<(&str, &str)> = entries
            .iter()
            .filter(|(key, _)| written.get(key).is_none_or(|&last| last < revision))
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        if fresh.len() < entries.len() {
            tracing::debug!("Skipping {} superseded entries", entries.len() - fresh.len());
        }
        if fresh.is_empty() {
            return Ok(());
        }

        self.store.set_many(&fresh).map_err(|e| e.to_string())?;
        for (key, _) in &fresh {
            written.insert(*key, revision);
        }
        Ok(())
    }
}
