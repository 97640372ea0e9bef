// Tue Jan 13 2026 - Alex

pub mod collector;
pub mod coordinator;
pub mod error;
pub mod report;

pub use collector::ResultCollector;
pub use coordinator::{HarvestEngine, NullObserver, RunObserver};
pub use error::SourceFailure;
pub use report::{RunReport, SourceOutcome, SourceReport};
