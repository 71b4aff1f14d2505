//! Settings and audit-log commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Currency, UnknownCurrency};
use crate::storage::Storage;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show settings and file locations
    Show,
    /// Set the currency amounts are labelled with (e.g., USD, EUR, INR)
    SetCurrency {
        code: String,
    },
    /// Set the monthly spending budget shown on the dashboard
    SetBudget {
        amount: String,
    },
    /// List supported currencies
    Currencies,
}

/// Handle a config command; `None` behaves like `show`
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> TrackerResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:            {} ({})", settings.currency.code(), settings.currency.name());
            println!("  Monthly budget:      {}", settings.format_money(settings.monthly_budget));
            println!("  Recent transactions: {}", settings.recent_transactions);
            println!("  Budget alerts:       {}", settings.notifications.budget_alerts);
            println!("  Goal reminders:      {}", settings.notifications.goal_reminders);
            println!("  Weekly reports:      {}", settings.notifications.weekly_reports);
        }
        ConfigCommands::SetCurrency { code } => {
            let currency: Currency = code
                .parse()
                .map_err(|e: UnknownCurrency| TrackerError::Validation(e.to_string()))?;
            settings.currency = currency;
            settings.save(paths)?;
            println!("Currency set to {} ({})", currency.code(), currency.symbol());
        }
        ConfigCommands::SetBudget { amount } => {
            let budget = parse_amount(&amount)?;
            if !budget.is_positive() || !budget.is_within_limit() {
                return Err(TrackerError::Validation(
                    "Monthly budget must be greater than zero and at most one trillion".to_string(),
                ));
            }
            settings.monthly_budget = budget;
            settings.save(paths)?;
            println!("Monthly budget set to {}", settings.format_money(budget));
        }
        ConfigCommands::Currencies => {
            for currency in Currency::all() {
                println!("  {}  {:<4} {}", currency.code(), currency.symbol(), currency.name());
            }
        }
    }

    Ok(())
}

/// Print the most recent audit log entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!(
        "\nShowing {} of {} entries",
        entries.len(),
        storage.audit().entry_count()?
    );

    Ok(())
}
