// Tue Jan 15 2026 - Alex

use crate::source::ScrapeError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Why a source contributed nothing to a run.
#[derive(Error, Debug)]
pub enum SourceFailure {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
