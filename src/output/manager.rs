// Tue Jan 13 2026 - Alex

use crate::output::error::OutputError;
use crate::output::json::JsonSerializer;
use crate::output::table::to_table;
use crate::record::ResultSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_JSON_FILE: &str = "data.json";
pub const DEFAULT_CSV_FILE: &str = "data.csv";

/// Both snapshot blobs, serialized but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub json: String,
    pub csv: String,
}

#[derive(Debug, Clone)]
pub struct WrittenOutput {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub records: usize,
}

/// Persists a result set as the two snapshot artifacts.
pub struct OutputManager {
    output_dir: PathBuf,
    json_file: String,
    csv_file: String,
    json: JsonSerializer,
}

impl OutputManager {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            json_file: DEFAULT_JSON_FILE.to_string(),
            csv_file: DEFAULT_CSV_FILE.to_string(),
            json: JsonSerializer::new(),
        }
    }

    pub fn with_json_file(mut self, name: &str) -> Self {
        self.json_file = name.to_string();
        self
    }

    pub fn with_csv_file(mut self, name: &str) -> Self {
        self.csv_file = name.to_string();
        self
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }

    pub fn render(&self, results: &ResultSet) -> Result<RenderedOutput, OutputError> {
        Ok(RenderedOutput {
            json: self.json.serialize(results)?,
            csv: to_table(results).to_csv()?,
        })
    }

    /// Serializes both artifacts before touching the filesystem.
    pub fn write(&self, results: &ResultSet) -> Result<WrittenOutput, OutputError> {
        let rendered = self.render(results)?;

        fs::create_dir_all(&self.output_dir).map_err(|source| OutputError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let json_path = self.json_path();
        write_file(&json_path, &rendered.json)?;
        let csv_path = self.csv_path();
        write_file(&csv_path, &rendered.csv)?;

        log::info!(
            "Wrote {} records to {} and {}",
            results.len(),
            json_path.display(),
            csv_path.display()
        );

        Ok(WrittenOutput {
            json_path,
            csv_path,
            records: results.len(),
        })
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
