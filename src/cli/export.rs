//! CLI commands for data export

use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

use super::create_output;
use crate::analytics::{FilterSpec, ALL};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV, optionally filtered
    Csv {
        /// Output file path, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Match description or category (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact category, or "all"
        #[arg(short, long, default_value = ALL)]
        category: String,
        /// income, expense, or "all"
        #[arg(short = 't', long = "type", default_value = ALL)]
        kind: String,
        /// Month (YYYY-MM)
        #[arg(short, long, default_value = "")]
        month: String,
    },

    /// Export all transactions and goals to JSON
    Json {
        /// Output file path, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },

    /// Export all transactions and goals to YAML
    Yaml {
        /// Output file path, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Csv {
            output,
            search,
            category,
            kind,
            month,
        } => {
            let filter = FilterSpec::from_raw(&search, &category, &kind, &month)?;
            let output = resolve_output(storage, output, "csv")?;
            let mut writer = create_output(&output)?;
            let count = csv::export_transactions_csv(storage, &filter, &mut writer)?;
            flush(&mut writer)?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        ExportCommands::Json { output, pretty } => {
            let output = resolve_output(storage, output, "json")?;
            let mut writer = create_output(&output)?;
            json::export_full_json(storage, &mut writer, pretty)?;
            flush(&mut writer)?;
            println!("Full data set exported to: {}", output.display());
        }
        ExportCommands::Yaml { output } => {
            let output = resolve_output(storage, output, "yaml")?;
            let mut writer = create_output(&output)?;
            yaml::export_full_yaml(storage, &mut writer)?;
            flush(&mut writer)?;
            println!("Full data set exported to: {}", output.display());
        }
    }

    Ok(())
}

/// The requested path, or a timestamped file in the exports directory
fn resolve_output(storage: &Storage, output: Option<PathBuf>, extension: &str) -> TrackerResult<PathBuf> {
    if let Some(path) = output {
        return Ok(path);
    }

    let dir = storage.paths().export_dir();
    std::fs::create_dir_all(&dir).map_err(|e| {
        TrackerError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    Ok(dir.join(format!("fintrack-{}.{}", stamp, extension)))
}

fn flush<W: Write>(writer: &mut W) -> TrackerResult<()> {
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}
