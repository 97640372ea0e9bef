// Tue Jan 15 2026 - Alex

use crate::record::{CaseRecord, RawRecord, PRIVATE_FIELD_MARKER, SCRAPER_FIELD};

/// Fuses adapter payloads with the owning source's context fields.
#[derive(Debug, Clone)]
pub struct LocationMerger {
    context: RawRecord,
}

impl LocationMerger {
    pub fn new(context: RawRecord) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &RawRecord {
        &self.context
    }

    /// Context wins on key collisions. Candidate field positions are kept,
    /// new context fields are appended.
    pub fn merge(&self, mut candidate: RawRecord) -> CaseRecord {
        for (name, value) in &self.context {
            candidate.insert(name.clone(), value.clone());
        }

        candidate.retain(|name, _| !name.starts_with(PRIVATE_FIELD_MARKER));
        candidate.shift_remove(SCRAPER_FIELD);

        CaseRecord::from_fields(candidate)
    }
}
