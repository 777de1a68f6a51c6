//! Option lists for the region → district → institution selectors.
//!
//! Every list keeps first-occurrence order from the record store and holds
//! each value once. An empty upstream key yields an empty list.

use std::collections::HashSet;

use super::record::Record;

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

pub fn region_options(records: &[Record]) -> Vec<String> {
    distinct(records.iter().map(|r| r.region.as_str()))
}

pub fn district_options(records: &[Record], region: &str) -> Vec<String> {
    if region.is_empty() {
        return Vec::new();
    }
    distinct(
        records
            .iter()
            .filter(|r| r.region == region)
            .map(|r| r.district.as_str()),
    )
}

pub fn institution_options(records: &[Record], region: &str, district: &str) -> Vec<String> {
    if region.is_empty() || district.is_empty() {
        return Vec::new();
    }
    distinct(
        records
            .iter()
            .filter(|r| r.region == region && r.district == district)
            .map(|r| r.institution.as_str()),
    )
}
