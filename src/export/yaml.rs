//! YAML Export functionality

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export all data to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# fintrack data export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
