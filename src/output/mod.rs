// Tue Jan 13 2026 - Alex

pub mod error;
pub mod json;
pub mod manager;
pub mod table;

pub use error::OutputError;
pub use json::{to_json, JsonSerializer};
pub use manager::{OutputManager, RenderedOutput, WrittenOutput};
pub use table::{to_csv, to_table, ColumnSet, Table, CANONICAL_COLUMNS};
