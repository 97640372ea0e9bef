// Tue Jan 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    #[error("Reported total {0} is not reasonable")]
    NonPositiveTotal(f64),
    #[error("Summed total {computed} is not within {tolerance} of reported total {reported}")]
    Mismatch {
        computed: f64,
        reported: f64,
        tolerance: f64,
    },
    #[error("No sub-region records to aggregate")]
    NoSubRecords,
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),
}
