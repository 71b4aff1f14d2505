//! Configuration for fintrack
//!
//! Path resolution for the data directory and the user's display settings.

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{NotificationSettings, Settings};
