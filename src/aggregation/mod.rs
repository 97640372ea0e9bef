// Tue Jan 15 2026 - Alex

pub mod check;
pub mod error;
pub mod sum;

pub use check::{aggregate_and_verify, AggregationCheck, DEFAULT_TOLERANCE};
pub use error::AggregationError;
pub use sum::sum_records;
