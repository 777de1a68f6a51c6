//! Conjunctive row filter over the record store.

use super::record::Record;
use super::selection::Selection;

struct Predicate<'s> {
    selection: &'s Selection,
    needle: String,
}

impl<'s> Predicate<'s> {
    fn new(selection: &'s Selection) -> Self {
        Self {
            selection,
            needle: selection.search().to_lowercase(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let s = self.selection;
        (s.region().is_empty() || record.region == s.region())
            && (s.district().is_empty() || record.district == s.district())
            && (s.institution().is_empty() || record.institution == s.institution())
            && (self.needle.is_empty() || record.institution.to_lowercase().contains(&self.needle))
    }
}

/// Positions of matching records, in store order.
pub fn filter_indices(records: &[Record], selection: &Selection) -> Vec<usize> {
    let predicate = Predicate::new(selection);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate.matches(record))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter<'a>(records: &'a [Record], selection: &Selection) -> Vec<&'a Record> {
    let predicate = Predicate::new(selection);
    records.iter().filter(|r| predicate.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::testing::sample_store;

    #[test]
    fn test_empty_selection_returns_everything_in_order() {
        let store = sample_store();
        let all: Vec<&Record> = store.records().iter().collect();
        assert_eq!(filter(store.records(), &Selection::default()), all);
    }

    #[test]
    fn test_region_filter_counts_region_rows() {
        let store = sample_store();
        let mut selection = Selection::default();
        selection.set_region("город Ташкент");

        let expected = store
            .records()
            .iter()
            .filter(|r| r.region == "город Ташкент")
            .count();
        let rows = filter(store.records(), &selection);
        assert_eq!(rows.len(), expected);
        assert_eq!(filter_indices(store.records(), &selection), vec![0, 1, 2, 5]);
    }

    #[test]
    fn test_search_never_widens_region_result() {
        let store = sample_store();
        let mut selection = Selection::default();
        selection.set_region("город Ташкент");
        let region_only = filter(store.records(), &selection).len();

        for needle in ["больница", "ШКОЛА", "поликлиника", "нет такого", ""] {
            selection.set_search(needle);
            assert!(filter(store.records(), &selection).len() <= region_only);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring_on_institution() {
        let store = sample_store();
        let mut selection = Selection::default();
        selection.set_search("БОЛЬНИЦА");
        assert_eq!(filter_indices(store.records(), &selection), vec![0, 3, 4, 5]);

        // Region names are not searched.
        selection.set_search("Ташкент");
        assert!(filter(store.records(), &selection).is_empty());
    }

    #[test]
    fn test_search_text_is_matched_with_its_spaces() {
        let store = sample_store();
        let mut selection = Selection::default();

        selection.set_search("   ");
        assert!(filter(store.records(), &selection).is_empty());

        selection.set_search("№1 ");
        assert!(filter(store.records(), &selection).is_empty());

        selection.set_search("№1");
        assert_eq!(filter_indices(store.records(), &selection), vec![1]);

        selection.set_search("ная больница");
        assert_eq!(filter_indices(store.records(), &selection), vec![0, 3, 4, 5]);
    }

    #[test]
    fn test_full_hierarchy_selects_matching_rows() {
        let store = sample_store();
        let mut selection = Selection::default();
        selection.set_region("город Ташкент");
        selection.set_district("Алмазарский район");
        selection.set_institution("Школа №1");

        let rows = filter(store.records(), &selection);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].day, "Вторник");
    }

    #[test]
    fn test_filter_on_empty_store() {
        let mut selection = Selection::default();
        selection.set_region("город Ташкент");
        assert!(filter(&[], &selection).is_empty());
    }
}
