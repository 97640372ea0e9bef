// Tue Jan 13 2026 - Alex

use crate::output::error::OutputError;
use crate::record::ResultSet;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes each record with its own field set; no padding to the table
/// schema.
pub struct JsonSerializer {
    pretty_print: bool,
    indent_size: usize,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            indent_size: 2,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn serialize(&self, results: &ResultSet) -> Result<String, OutputError> {
        if !self.pretty_print {
            return Ok(serde_json::to_string(results)?);
        }

        let indent = " ".repeat(self.indent_size);
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        results.serialize(&mut serializer)?;

        Ok(String::from_utf8(buf)?)
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_json(results: &ResultSet) -> Result<String, OutputError> {
    JsonSerializer::new().serialize(results)
}
