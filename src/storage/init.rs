//! Storage initialization
//!
//! First-run setup: directories plus empty record files, so that a fresh
//! install reads the same as one with all its records deleted.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::file_io::write_json_atomic;
use super::goals::GoalData;
use super::transactions::TransactionData;

/// Initialize storage for a fresh installation
///
/// Existing record files are left untouched.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        write_json_atomic(paths.transactions_file(), &TransactionData::default())?;
    }

    if !paths.goals_file().exists() {
        write_json_atomic(paths.goals_file(), &GoalData::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.transactions_file().exists() || !paths.goals_file().exists()
}
