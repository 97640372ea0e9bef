// Tue Jan 13 2026 - Alex

use crate::orchestration::collector::ResultCollector;
use crate::orchestration::error::SourceFailure;
use crate::orchestration::report::{RunReport, SourceReport};
use crate::record::{CaseRecord, ResultSet};
use crate::source::{Scraper, SourceDescriptor, SourceRegistry};
use crate::utils::logging::scoped_timer;
use crate::validation::{self, LocationMerger, RecordValidator};

/// Hooks for frontends that want to follow a run (progress bars etc).
pub trait RunObserver {
    fn begin(&mut self, _total: usize) {}
    fn source_started(&mut self, _descriptor: &SourceDescriptor) {}
    fn source_finished(&mut self, _report: &SourceReport) {}
}

pub struct NullObserver;

impl RunObserver for NullObserver {}

/// Runs every registered source once, strictly in registry order.
///
/// Sources are awaited one at a time, which keeps outbound request
/// concurrency at one and makes the result order equal the registry order.
/// A failing source (scrape or validation) is logged and contributes
/// nothing; the run always completes.
pub struct HarvestEngine {
    validator: RecordValidator,
}

impl HarvestEngine {
    pub fn new() -> Self {
        Self {
            validator: RecordValidator::new(),
        }
    }

    pub async fn run(&self, registry: &SourceRegistry) -> ResultSet {
        let (results, _) = self.run_with_report(registry, &mut NullObserver).await;
        results
    }

    pub async fn run_with_report(
        &self,
        registry: &SourceRegistry,
        observer: &mut dyn RunObserver,
    ) -> (ResultSet, RunReport) {
        let _timer = scoped_timer("harvest");
        let mut collector = ResultCollector::new();

        observer.begin(registry.len());

        for descriptor in registry {
            observer.source_started(descriptor);

            match descriptor.scraper() {
                None => {
                    log::debug!("Skipping {}: no scraper configured", descriptor.name());
                    collector.skip(descriptor);
                }
                Some(scraper) => match self.harvest_source(descriptor, scraper).await {
                    Ok(batch) => {
                        log::info!("Collected {} records from {}", batch.len(), descriptor.name());
                        collector.accept(descriptor, batch);
                    }
                    Err(failure) => {
                        log::error!("Error processing {}: {}", descriptor.name(), failure);
                        collector.reject(descriptor, failure);
                    }
                },
            }

            if let Some(report) = collector.report().last() {
                observer.source_finished(report);
            }
        }

        let (results, report) = collector.finish();
        log::info!("{}", report.summary());
        (results, report)
    }

    async fn harvest_source(
        &self,
        descriptor: &SourceDescriptor,
        scraper: &dyn Scraper,
    ) -> Result<Vec<CaseRecord>, SourceFailure> {
        let raw = scraper.scrape().await?;
        let merger = LocationMerger::new(descriptor.context());
        Ok(validation::process_with(&self.validator, raw, &merger)?)
    }
}

impl Default for HarvestEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::report::SourceOutcome;
    use crate::record::{FieldValue, Location, RawScrapeResult, PRIVATE_FIELD_MARKER, SCRAPER_FIELD};
    use crate::source::{FixtureScraper, Granularity, ScrapeError};
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingScraper;

    #[async_trait]
    impl Scraper for FailingScraper {
        async fn scrape(&self) -> Result<RawScrapeResult, ScrapeError> {
            Err(ScrapeError::Other("connection reset".to_string()))
        }
    }

    fn county_source(county: &str, payload: serde_json::Value) -> SourceDescriptor {
        SourceDescriptor::new(Location::country("USA").with_state("AZ").with_county(county), Granularity::County)
            .with_scraper(FixtureScraper::inline(payload))
    }

    fn counties(results: &ResultSet) -> Vec<String> {
        results
            .iter()
            .filter_map(|r| r.get("county").and_then(|v| v.as_str()).map(str::to_string))
            .collect()
    }

    #[derive(Default)]
    struct CountingObserver {
        total: usize,
        started: usize,
        finished: Vec<String>,
    }

    impl RunObserver for CountingObserver {
        fn begin(&mut self, total: usize) {
            self.total = total;
        }

        fn source_started(&mut self, _descriptor: &SourceDescriptor) {
            self.started += 1;
        }

        fn source_finished(&mut self, report: &SourceReport) {
            self.finished.push(report.name.clone());
        }
    }

    #[tokio::test]
    async fn test_results_follow_registry_order() {
        let registry = SourceRegistry::new()
            .with(county_source("Pima", json!({"cases": 3})))
            .with(county_source("Maricopa", json!({"cases": 9})));

        let results = HarvestEngine::new().run(&registry).await;
        assert_eq!(counties(&results), vec!["Pima", "Maricopa"]);
    }

    #[tokio::test]
    async fn test_invalid_record_discards_whole_batch() {
        let registry = SourceRegistry::new()
            .with(county_source("Pima", json!({"cases": 3})))
            .with(
                SourceDescriptor::new(Location::country("iso1:AU"), Granularity::State).with_scraper(
                    FixtureScraper::inline(json!([
                        {"state": "iso2:AU-NSW", "cases": 10},
                        {"state": "iso2:AU-VIC", "cases": null},
                        {"state": "iso2:AU-QLD", "cases": 4}
                    ])),
                ),
            );

        let (results, report) = HarvestEngine::new().run_with_report(&registry, &mut NullObserver).await;

        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.get("state") == Some(&FieldValue::from("AZ"))));
        assert_eq!(report.failed(), 1);
    }

    #[tokio::test]
    async fn test_failing_scraper_does_not_stop_run() {
        let registry = SourceRegistry::new()
            .with(
                SourceDescriptor::new(Location::country("USA").with_state("CA"), Granularity::State)
                    .with_scraper(FailingScraper),
            )
            .with(county_source("Pima", json!({"cases": 3})));

        let (results, report) = HarvestEngine::new().run_with_report(&registry, &mut NullObserver).await;

        assert_eq!(counties(&results), vec!["Pima"]);
        assert!(matches!(
            report.sources()[0].outcome,
            SourceOutcome::Failed(SourceFailure::Scrape(_))
        ));
    }

    #[tokio::test]
    async fn test_source_without_scraper_is_skipped() {
        let registry = SourceRegistry::new()
            .with(SourceDescriptor::new(Location::country("USA").with_state("NY"), Granularity::State))
            .with(county_source("Pima", json!({"cases": 3})));

        let mut observer = CountingObserver::default();
        let (results, report) = HarvestEngine::new().run_with_report(&registry, &mut observer).await;

        assert_eq!(results.len(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(observer.total, 2);
        assert_eq!(observer.started, 2);
        assert_eq!(observer.finished, vec!["NY, USA", "Pima, AZ, USA"]);
    }

    #[tokio::test]
    async fn test_record_invariants_hold() {
        let registry = SourceRegistry::new()
            .with(county_source(
                "Pima",
                json!([
                    {"cases": 3, "_page": 2, "scraper": "pima"},
                    {"cases": 4.0, "deaths": 1, "_raw": "4"}
                ]),
            ))
            .with(county_source("Yuma", json!({"cases": "n/a"})))
            .with(county_source("Cochise", json!({"deaths": 1})))
            .with(county_source("Gila", json!({"cases": 2.5})));

        let results = HarvestEngine::new().run(&registry).await;

        assert_eq!(results.len(), 2);
        for record in &results {
            assert!(record.cases().is_some());
            for (name, value) in record.fields() {
                assert!(!name.starts_with(PRIVATE_FIELD_MARKER));
                assert!(!value.is_null() && !value.is_non_finite());
            }
            assert!(!record.contains(SCRAPER_FIELD));
        }
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let (results, report) = HarvestEngine::new()
            .run_with_report(&SourceRegistry::new(), &mut NullObserver)
            .await;
        assert!(results.is_empty());
        assert!(report.sources().is_empty());
    }
}
