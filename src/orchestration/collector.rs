// Tue Jan 13 2026 - Alex

use crate::orchestration::error::SourceFailure;
use crate::orchestration::report::{RunReport, SourceOutcome, SourceReport};
use crate::record::{CaseRecord, ResultSet};
use crate::source::SourceDescriptor;

/// Accumulates whole adapter batches and their outcomes during a run.
#[derive(Debug, Default)]
pub struct ResultCollector {
    results: ResultSet,
    report: RunReport,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, descriptor: &SourceDescriptor, batch: Vec<CaseRecord>) {
        let records = batch.len();
        self.results.append_batch(batch);
        self.record(descriptor, SourceOutcome::Collected { records });
    }

    pub fn reject(&mut self, descriptor: &SourceDescriptor, failure: SourceFailure) {
        self.record(descriptor, SourceOutcome::Failed(failure));
    }

    pub fn skip(&mut self, descriptor: &SourceDescriptor) {
        self.record(descriptor, SourceOutcome::Skipped);
    }

    fn record(&mut self, descriptor: &SourceDescriptor, outcome: SourceOutcome) {
        self.report.push(SourceReport {
            name: descriptor.name(),
            priority: descriptor.priority,
            outcome,
        });
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn record_count(&self) -> usize {
        self.results.len()
    }

    pub fn finish(self) -> (ResultSet, RunReport) {
        (self.results, self.report)
    }
}
