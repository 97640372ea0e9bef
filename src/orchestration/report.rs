// Tue Jan 13 2026 - Alex

use crate::orchestration::error::SourceFailure;

#[derive(Debug)]
pub enum SourceOutcome {
    Collected { records: usize },
    Failed(SourceFailure),
    Skipped,
}

impl SourceOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SourceOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct SourceReport {
    pub name: String,
    pub priority: i32,
    pub outcome: SourceOutcome,
}

/// Per-source outcomes of one run, in registry order.
#[derive(Debug, Default)]
pub struct RunReport {
    sources: Vec<SourceReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: SourceReport) {
        self.sources.push(report);
    }

    pub fn sources(&self) -> &[SourceReport] {
        &self.sources
    }

    pub fn last(&self) -> Option<&SourceReport> {
        self.sources.last()
    }

    pub fn succeeded(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Collected { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.sources.iter().filter(|s| s.outcome.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.outcome, SourceOutcome::Skipped))
            .count()
    }

    pub fn total_records(&self) -> usize {
        self.sources
            .iter()
            .map(|s| match s.outcome {
                SourceOutcome::Collected { records } => records,
                _ => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources.iter().filter(|s| s.outcome.is_failure())
    }

    pub fn summary(&self) -> String {
        format!(
            "Sources: {} succeeded, {} failed, {} skipped; Records: {}",
            self.succeeded(),
            self.failed(),
            self.skipped(),
            self.total_records()
        )
    }
}
