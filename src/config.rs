// Tue Jan 13 2026 - Alex

use crate::aggregation::DEFAULT_TOLERANCE;
use crate::output::manager::{DEFAULT_CSV_FILE, DEFAULT_JSON_FILE, DEFAULT_OUTPUT_DIR};
use crate::output::OutputManager;
use crate::record::Location;
use crate::source::{FixtureScraper, Granularity, Maintainer, Provenance, SourceDescriptor, SourceRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
    pub tolerance: f64,
    pub sources: Vec<SourceConfig>,
}

/// One file-backed source.
///
/// `records` points at a JSON file (relative paths resolve against the config
/// file's directory); `inline` embeds the payload. With neither, the source
/// is registered without a scraper and skipped at run time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(flatten)]
    pub location: Location,
    pub aggregate: Granularity,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub sources: Vec<Provenance>,
    #[serde(default, rename = "maintainer")]
    pub maintainers: Vec<Maintainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_total: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            json_file: DEFAULT_JSON_FILE.to_string(),
            csv_file: DEFAULT_CSV_FILE.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            sources: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 || self.tolerance >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be in [0.0, 1.0), got {}",
                self.tolerance
            )));
        }
        if self.json_file.is_empty() || self.csv_file.is_empty() {
            return Err(ConfigError::Invalid("output file names must not be empty".to_string()));
        }
        if self.json_file == self.csv_file {
            return Err(ConfigError::Invalid("json_file and csv_file must differ".to_string()));
        }
        for source in &self.sources {
            if source.records.is_some() && source.inline.is_some() {
                return Err(ConfigError::Invalid(format!(
                    "source {} sets both records and inline",
                    source.location
                )));
            }
        }
        Ok(())
    }

    /// Builds the registry in declaration order.
    pub fn build_registry(&self, base_dir: &Path) -> SourceRegistry {
        self.sources
            .iter()
            .map(|source| source.to_descriptor(base_dir, self.tolerance))
            .collect()
    }

    pub fn output_manager(&self) -> OutputManager {
        OutputManager::new(&self.output_dir)
            .with_json_file(&self.json_file)
            .with_csv_file(&self.csv_file)
    }
}

impl SourceConfig {
    pub fn new(location: Location, aggregate: Granularity) -> Self {
        Self {
            location,
            aggregate,
            priority: 0,
            url: None,
            sources: Vec::new(),
            maintainers: Vec::new(),
            records: None,
            inline: None,
            reported_total: None,
        }
    }

    pub fn to_descriptor(&self, base_dir: &Path, tolerance: f64) -> SourceDescriptor {
        let mut descriptor =
            SourceDescriptor::new(self.location.clone(), self.aggregate).with_priority(self.priority);

        if let Some(url) = &self.url {
            descriptor = descriptor.with_url(url);
        }
        for source in &self.sources {
            descriptor = descriptor.with_source(source.clone());
        }
        for maintainer in &self.maintainers {
            descriptor = descriptor.with_maintainer(maintainer.clone());
        }

        let scraper = match (&self.records, &self.inline) {
            (Some(path), _) => Some(FixtureScraper::from_file(base_dir.join(path))),
            (None, Some(value)) => Some(FixtureScraper::inline(value.clone())),
            (None, None) => None,
        };

        match scraper {
            Some(scraper) => {
                let scraper = match self.reported_total {
                    Some(total) => scraper.with_reported_total(total, self.location.clone()),
                    None => scraper,
                };
                descriptor.with_scraper(scraper.with_tolerance(tolerance))
            }
            None => descriptor,
        }
    }
}
