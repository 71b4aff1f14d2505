//! Export module for fintrack
//!
//! - CSV: a filtered transaction list (spreadsheet-compatible)
//! - JSON: the complete data set, machine-readable
//! - YAML: the complete data set, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
