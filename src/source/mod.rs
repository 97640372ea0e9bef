// Tue Jan 15 2026 - Alex

pub mod descriptor;
pub mod error;
pub mod fixture;
pub mod registry;
pub mod scraper;

pub use descriptor::{Granularity, Maintainer, Provenance, SourceDescriptor};
pub use error::ScrapeError;
pub use fixture::{records_from_json, FixtureOrigin, FixtureScraper};
pub use registry::SourceRegistry;
pub use scraper::Scraper;
