//! Append-only audit trail of roster changes.
//!
//! One line per successful mutating command:
//! `2025-10-20 20:00:28 | Employee deleted: David Li (...)`.

use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` stamped with the local time.
    pub fn record(&self, message: &str) -> std::io::Result<()> {
        let line = format_entry(Local::now().naive_local(), message);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

/// Multi-line messages are folded onto one line.
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    let folded = message.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    format!("{} | {}\n", at.format(TIMESTAMP_FORMAT), folded)
}
