use std::num::NonZeroUsize;

use super::cascade::{district_options, institution_options, region_options};
use super::filter::filter_indices;
use super::pagination::{PageError, Pagination};
use super::persist;
use super::record::{Record, RecordStore};
use super::selection::Selection;

/// Owner of the record store, the selection and every view derived from them.
///
/// Each mutation runs the whole pipeline before returning: cascade options,
/// then the filter, then a pagination reset to page 1. Until a store is
/// loaded every view is empty.
#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    selection: Selection,
    pagination: Pagination,
    regions: Vec<String>,
    districts: Vec<String>,
    institutions: Vec<String>,
    filtered: Vec<usize>,
}

impl Session {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            store: RecordStore::default(),
            selection: Selection::default(),
            pagination: Pagination::new(page_size),
            regions: Vec::new(),
            districts: Vec::new(),
            institutions: Vec::new(),
            filtered: Vec::new(),
        }
    }

    /// Replaces the record store. `initial` is checked against the new
    /// records and whatever no longer fits the hierarchy is dropped.
    pub fn load(&mut self, store: RecordStore, initial: &Selection) {
        self.selection = persist::validated(initial, store.records());
        self.regions = region_options(store.records());
        self.store = store;
        self.recompute();
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.selection.set_region(region);
        self.recompute();
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        self.selection.set_district(district);
        self.recompute();
    }

    pub fn set_institution(&mut self, institution: impl Into<String>) {
        self.selection.set_institution(institution);
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.selection.set_search(search);
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.selection.reset();
        self.recompute();
    }

    pub fn set_page(&mut self, page: usize) -> Result<(), PageError> {
        self.pagination.set_page(page)
    }

    pub fn region_options(&self) -> &[String] {
        &self.regions
    }

    pub fn district_options(&self) -> &[String] {
        &self.districts
    }

    pub fn institution_options(&self) -> &[String] {
        &self.institutions
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Record> {
        let records = self.store.records();
        self.filtered.iter().map(move |&index| &records[index])
    }

    /// Rows on the current page.
    pub fn visible(&self) -> Vec<&Record> {
        let records = self.store.records();
        self.pagination
            .slice(&self.filtered)
            .iter()
            .map(|&index| &records[index])
            .collect()
    }

    fn recompute(&mut self) {
        let records = self.store.records();
        let s = &self.selection;
        self.districts = district_options(records, s.region());
        self.institutions = institution_options(records, s.region(), s.district());
        self.filtered = filter_indices(records, s);
        self.pagination.reset(self.filtered.len());
    }
}
