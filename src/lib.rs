// Tue Jan 15 2026 - Alex

pub mod aggregation;
pub mod config;
pub mod orchestration;
pub mod output;
pub mod record;
pub mod source;
pub mod utils;
pub mod validation;

pub use config::Config;
pub use orchestration::{HarvestEngine, RunObserver, RunReport};
pub use output::OutputManager;
pub use record::{CaseRecord, FieldValue, Location, RawRecord, RawScrapeResult, ResultSet};
pub use source::{Scraper, SourceDescriptor, SourceRegistry};
pub use validation::RecordValidator;
