//! Audit logging for fintrack
//!
//! Every create, update and delete performed through the services appends
//! one JSON line to `audit.log`, carrying before/after snapshots of the
//! record.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries to and reads them back from the log file

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
