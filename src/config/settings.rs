//! User settings for fintrack
//!
//! Display currency, the monthly budget shown on the dashboard, and
//! notification preferences. Every field has a serde default so older or
//! hand-edited config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{Currency, Money};

/// Notification preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "enabled")]
    pub budget_alerts: bool,
    #[serde(default = "enabled")]
    pub goal_reminders: bool,
    #[serde(default)]
    pub weekly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            budget_alerts: true,
            goal_reminders: true,
            weekly_reports: false,
        }
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used to label amounts; amounts are never converted
    #[serde(default)]
    pub currency: Currency,

    /// Spending limit the dashboard measures monthly expenses against
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// How many transactions the dashboard lists
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    Money::from_units(1000, 0)
}

fn default_recent_transactions() -> usize {
    5
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            monthly_budget: default_monthly_budget(),
            recent_transactions: default_recent_transactions(),
            notifications: NotificationSettings::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount in the configured currency
    pub fn format_money(&self, amount: Money) -> String {
        self.currency.format(amount)
    }
}
