// Tue Jan 13 2026 - Alex

pub mod location;
pub mod value;

pub use location::Location;
pub use value::FieldValue;

use indexmap::IndexMap;
use serde::Serialize;

pub const CITY: &str = "city";
pub const COUNTY: &str = "county";
pub const STATE: &str = "state";
pub const COUNTRY: &str = "country";
pub const CASES: &str = "cases";
pub const DEATHS: &str = "deaths";
pub const RECOVERED: &str = "recovered";
pub const TESTED: &str = "tested";
pub const URL: &str = "url";

/// Fields starting with this marker are adapter scratch state.
pub const PRIVATE_FIELD_MARKER: char = '_';

/// Back-reference to the owning adapter, never part of a record.
pub const SCRAPER_FIELD: &str = "scraper";

/// Candidate record as produced by an adapter, in field insertion order.
pub type RawRecord = IndexMap<String, FieldValue>;

/// Builds a raw record from `(name, value)` pairs.
pub fn raw_record<I, K, V>(pairs: I) -> RawRecord
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// What a single scrape operation hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScrapeResult {
    Single(RawRecord),
    Many(Vec<RawRecord>),
}

impl RawScrapeResult {
    pub fn len(&self) -> usize {
        match self {
            RawScrapeResult::Single(_) => 1,
            RawScrapeResult::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_records(self) -> Vec<RawRecord> {
        match self {
            RawScrapeResult::Single(record) => vec![record],
            RawScrapeResult::Many(records) => records,
        }
    }
}

impl From<RawRecord> for RawScrapeResult {
    fn from(record: RawRecord) -> Self {
        RawScrapeResult::Single(record)
    }
}

impl From<Vec<RawRecord>> for RawScrapeResult {
    fn from(records: Vec<RawRecord>) -> Self {
        RawScrapeResult::Many(records)
    }
}

/// A validated record carrying its geographic context.
///
/// Only the merger constructs these, so every instance has `cases`, holds no
/// null or NaN value and carries no private or back-reference field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaseRecord {
    fields: RawRecord,
}

impl CaseRecord {
    pub(crate) fn from_fields(fields: RawRecord) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn cases(&self) -> Option<&FieldValue> {
        self.fields.get(CASES)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &RawRecord {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered records of one run, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<CaseRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append_batch(&mut self, batch: Vec<CaseRecord>) {
        self.records.extend(batch);
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<CaseRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
