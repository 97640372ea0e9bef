// Tue Jan 15 2026 - Alex

use crate::aggregation::{aggregate_and_verify, DEFAULT_TOLERANCE};
use crate::record::{FieldValue, Location, RawRecord, RawScrapeResult};
use crate::source::error::ScrapeError;
use crate::source::scraper::Scraper;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

/// Where a fixture source reads its records from.
#[derive(Debug, Clone)]
pub enum FixtureOrigin {
    File(PathBuf),
    Inline(Value),
}

/// Offline source serving pre-extracted records from JSON.
///
/// The payload is either one object or an array of objects. When a reported
/// total is configured, the entries are treated as sub-regions and a verified
/// region total is appended.
#[derive(Debug, Clone)]
pub struct FixtureScraper {
    origin: FixtureOrigin,
    region: Location,
    reported_total: Option<f64>,
    tolerance: f64,
}

impl FixtureScraper {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FixtureOrigin::File(path.into()))
    }

    pub fn inline(value: Value) -> Self {
        Self::new(FixtureOrigin::Inline(value))
    }

    fn new(origin: FixtureOrigin) -> Self {
        Self {
            origin,
            region: Location::new(),
            reported_total: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_reported_total(mut self, total: f64, region: Location) -> Self {
        self.reported_total = Some(total);
        self.region = region;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    async fn load(&self) -> Result<Value, ScrapeError> {
        match &self.origin {
            FixtureOrigin::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ScrapeError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Ok(serde_json::from_str(&text)?)
            }
            FixtureOrigin::Inline(value) => Ok(value.clone()),
        }
    }
}

#[async_trait]
impl Scraper for FixtureScraper {
    async fn scrape(&self) -> Result<RawScrapeResult, ScrapeError> {
        let result = records_from_json(self.load().await?)?;

        let Some(reported) = self.reported_total else {
            return Ok(result);
        };

        let mut records = result.into_records();
        let total = aggregate_and_verify(&records, reported, self.tolerance, &self.region)?;
        records.push(total);

        Ok(RawScrapeResult::Many(records))
    }
}

/// Converts a JSON payload into candidate records.
pub fn records_from_json(value: Value) -> Result<RawScrapeResult, ScrapeError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| record_from_json(index, item))
            .collect::<Result<Vec<_>, _>>()
            .map(RawScrapeResult::Many),
        other => record_from_json(0, other).map(RawScrapeResult::Single),
    }
}

fn record_from_json(index: usize, value: Value) -> Result<RawRecord, ScrapeError> {
    let Value::Object(map) = value else {
        return Err(ScrapeError::NotAnObject { index });
    };

    map.into_iter()
        .map(|(name, value)| {
            let field = field_from_json(&name, value);
            field.map(|field| (name, field))
        })
        .collect()
}

fn field_from_json(name: &str, value: Value) -> Result<FieldValue, ScrapeError> {
    let unsupported = || ScrapeError::UnsupportedValue {
        field: name.to_string(),
    };

    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(b) => Ok(FieldValue::Bool(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(FieldValue::Integer(i)),
            None => n.as_f64().map(FieldValue::Float).ok_or_else(unsupported),
        },
        Value::String(s) => Ok(FieldValue::Text(s)),
        Value::Array(_) | Value::Object(_) => Err(unsupported()),
    }
}
