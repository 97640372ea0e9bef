// Tue Jan 15 2026 - Alex

use crate::aggregation::AggregationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed source data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Entry {index} is not an object")]
    NotAnObject { index: usize },
    #[error("Field {field} holds an unsupported value")]
    UnsupportedValue { field: String },
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error("Scrape failed: {0}")]
    Other(String),
}
