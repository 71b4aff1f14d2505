//! Audit log file
//!
//! `audit.log` holds one serialized [`AuditEntry`] per line, oldest first.
//! Lines are only ever appended; nothing rewrites the file.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

fn parse_line(number: usize, line: &str) -> TrackerResult<AuditEntry> {
    serde_json::from_str(line)
        .map_err(|e| TrackerError::Json(format!("audit.log line {}: {}", number, e)))
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry`; the file is created on first use
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Json(format!("Cannot serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Cannot open {}: {}", self.log_path.display(), e)))?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| TrackerError::Io(format!("Cannot append to audit log: {}", e)))
    }

    /// Every entry, oldest first; blank lines are ignored
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| TrackerError::Io(format!("Cannot open {}: {}", self.log_path.display(), e)))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| TrackerError::Io(format!("audit.log line {}: {}", index + 1, e)))?;
            if !line.trim().is_empty() {
                entries.push(parse_line(index + 1, &line)?);
            }
        }

        Ok(entries)
    }

    /// The last `count` entries, still oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn entry_count(&self) -> TrackerResult<usize> {
        self.read_all().map(|entries| entries.len())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
