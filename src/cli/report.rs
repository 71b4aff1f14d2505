//! CLI commands for reports

use clap::Subcommand;
use std::path::PathBuf;

use super::{create_output, parse_date_or_today, parse_month_or};
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::reports::{BreakdownReport, DashboardReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly overview: totals vs last month, breakdown, recent activity, goals
    Dashboard {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Judge goal deadlines as of this date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expenses by category for one month
    Breakdown {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Dashboard {
            month,
            as_of,
            output,
        } => {
            let today = parse_date_or_today(as_of.as_deref())?;
            let month = parse_month_or(month.as_deref(), today)?;
            let report = DashboardReport::generate(storage, settings, month, today)?;

            if let Some(path) = output {
                let mut writer = create_output(&path)?;
                report.export_csv(&mut writer)?;
                println!("Dashboard exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal(settings.currency));
            }
        }

        ReportCommands::Breakdown { month, output } => {
            let today = chrono::Local::now().date_naive();
            let month = parse_month_or(month.as_deref(), today)?;
            let report = BreakdownReport::generate(storage, month)?;

            if let Some(path) = output {
                let mut writer = create_output(&path)?;
                report.export_csv(&mut writer)?;
                println!("Breakdown exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal(settings.currency));
            }
        }
    }

    Ok(())
}
