// Tue Jan 15 2026 - Alex

use crate::record::{Location, RawRecord, URL};
use crate::source::scraper::Scraper;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the figures a source publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    City,
    County,
    State,
    Country,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::City => "city",
            Granularity::County => "county",
            Granularity::State => "state",
            Granularity::Country => "country",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// One registered data provider.
///
/// `priority` and `aggregate` are carried for conflict resolution between
/// overlapping sources; the engine does not act on them.
pub struct SourceDescriptor {
    pub location: Location,
    pub aggregate: Granularity,
    pub priority: i32,
    pub url: Option<String>,
    pub sources: Vec<Provenance>,
    pub maintainers: Vec<Maintainer>,
    scraper: Option<Box<dyn Scraper>>,
}

impl SourceDescriptor {
    pub fn new(location: Location, aggregate: Granularity) -> Self {
        Self {
            location,
            aggregate,
            priority: 0,
            url: None,
            sources: Vec::new(),
            maintainers: Vec::new(),
            scraper: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_source(mut self, source: Provenance) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_maintainer(mut self, maintainer: Maintainer) -> Self {
        self.maintainers.push(maintainer);
        self
    }

    pub fn with_scraper<S: Scraper + 'static>(mut self, scraper: S) -> Self {
        self.scraper = Some(Box::new(scraper));
        self
    }

    pub fn scraper(&self) -> Option<&dyn Scraper> {
        self.scraper.as_deref()
    }

    pub fn has_scraper(&self) -> bool {
        self.scraper.is_some()
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        self.location.to_string()
    }

    /// Fields merged into every record this source produces.
    pub fn context(&self) -> RawRecord {
        let mut context = self.location.to_fields();
        if let Some(url) = &self.url {
            context.insert(URL.to_string(), url.as_str().into());
        }
        context
    }
}

impl fmt::Debug for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDescriptor")
            .field("location", &self.location)
            .field("aggregate", &self.aggregate)
            .field("priority", &self.priority)
            .field("url", &self.url)
            .field("sources", &self.sources)
            .field("maintainers", &self.maintainers)
            .field("has_scraper", &self.has_scraper())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    #[test]
    fn test_context_includes_url() {
        let descriptor = SourceDescriptor::new(Location::country("iso1:AU"), Granularity::State)
            .with_url("https://www.health.gov.au/");
        let context = descriptor.context();

        assert_eq!(context.get("country"), Some(&FieldValue::from("iso1:AU")));
        assert_eq!(context.get("url"), Some(&FieldValue::from("https://www.health.gov.au/")));
    }

    #[test]
    fn test_defaults() {
        let descriptor = SourceDescriptor::new(Location::country("USA").with_state("AZ"), Granularity::County);
        assert_eq!(descriptor.priority, 0);
        assert!(!descriptor.has_scraper());
        assert_eq!(descriptor.name(), "AZ, USA");
        assert_eq!(descriptor.aggregate.to_string(), "county");
    }
}
