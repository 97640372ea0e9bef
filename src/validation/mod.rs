// Tue Jan 15 2026 - Alex

pub mod error;
pub mod merger;
pub mod validator;

pub use error::ValidationError;
pub use merger::LocationMerger;
pub use validator::RecordValidator;

use crate::record::{CaseRecord, RawRecord, RawScrapeResult};

/// Validates an adapter's whole result, then merges each candidate with
/// `context`.
///
/// The batch is all-or-nothing: one invalid candidate fails the call and no
/// record of the batch is returned.
pub fn process(raw: RawScrapeResult, context: &RawRecord) -> Result<Vec<CaseRecord>, ValidationError> {
    process_with(&RecordValidator::new(), raw, &LocationMerger::new(context.clone()))
}

pub fn process_with(
    validator: &RecordValidator,
    raw: RawScrapeResult,
    merger: &LocationMerger,
) -> Result<Vec<CaseRecord>, ValidationError> {
    let candidates = raw.into_records();
    validator.validate_all(&candidates)?;

    Ok(candidates.into_iter().map(|c| merger.merge(c)).collect())
}
