use serde::Deserialize;

/// Substituted for every missing or blank field at load time.
pub const PLACEHOLDER: &str = "-";

/// One schedule row as it arrives from a dataset source. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub region: Option<String>,
    pub district: Option<String>,
    pub institution: Option<String>,
    pub level: Option<String>,
    pub day: Option<String>,
    pub session: Option<String>,
    pub responsible: Option<String>,
}

/// A normalized schedule row. No field is ever empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub region: String,
    pub district: String,
    pub institution: String,
    pub level: String,
    pub day: String,
    pub session: String,
    pub responsible: String,
}

fn normalize(field: Option<String>) -> String {
    match field {
        Some(value) if !value.trim().is_empty() => value,
        _ => PLACEHOLDER.to_string(),
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self {
            region: normalize(raw.region),
            district: normalize(raw.district),
            institution: normalize(raw.institution),
            level: normalize(raw.level),
            day: normalize(raw.day),
            session: normalize(raw.session),
            responsible: normalize(raw.responsible),
        }
    }
}

/// Read-only sequence of records for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(raw: impl IntoIterator<Item = RawRecord>) -> Self {
        Self {
            records: raw.into_iter().map(Record::from).collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
