// Tue Jan 15 2026 - Alex

use crate::record::RawScrapeResult;
use crate::source::error::ScrapeError;
use async_trait::async_trait;

/// The scrape operation of one external source.
///
/// Implementations fetch and parse a single provider. The engine awaits each
/// call to completion before starting the next source.
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn scrape(&self) -> Result<RawScrapeResult, ScrapeError>;
}
