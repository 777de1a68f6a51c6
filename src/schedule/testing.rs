//! Fixtures shared by the schedule unit tests.

use super::record::{RawRecord, Record, RecordStore};

pub fn raw(region: &str, district: &str, institution: &str, day: &str) -> RawRecord {
    RawRecord {
        region: Some(region.to_string()),
        district: Some(district.to_string()),
        institution: Some(institution.to_string()),
        level: Some("Первичное звено".to_string()),
        day: Some(day.to_string()),
        session: Some("Утренний".to_string()),
        responsible: Some("Иванов И.И.".to_string()),
    }
}

pub fn record(region: &str, district: &str, institution: &str) -> Record {
    Record::from(raw(region, district, institution, "Понедельник"))
}

/// Six rows: four in Tashkent city, two in Andijan region.
pub fn sample_store() -> RecordStore {
    RecordStore::new([
        raw("город Ташкент", "Алмазарский район", "Центральная больница", "Понедельник"),
        raw("город Ташкент", "Алмазарский район", "Школа №1", "Вторник"),
        raw("город Ташкент", "Бектемирский район", "Семейная поликлиника №5", "Среда"),
        raw("Андижанская область", "Андижанский район", "Центральная больница", "Четверг"),
        raw("Андижанская область", "Асакинский район", "Районная больница", "Пятница"),
        raw("город Ташкент", "Алмазарский район", "Центральная больница", "Суббота"),
    ])
}
