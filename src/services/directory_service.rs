//! Directory service: the command dispatcher.
//!
//! Turns one line of input into a command, runs it against the roster,
//! persists the roster after a mutating command and records it in the
//! audit trail.

use crate::audit::AuditLog;
use crate::commands::CommandOutcome;
use crate::error::{DirectoryError, DirectoryResult};
use crate::parser::parse_command;
use crate::roster::Roster;
use crate::sample::sample_persons;
use crate::storage::RosterStorage;
use tracing::{debug, info, warn};

/// How the starting roster was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    Stored,
    Sample,
    Empty,
    /// The data file could not be read; it is left untouched until the next save
    Unreadable,
}

/// Owns the roster for one session.
pub struct DirectoryService {
    roster: Roster,
    storage: Box<dyn RosterStorage>,
    audit: Option<AuditLog>,
    source: RosterSource,
}

impl DirectoryService {
    /// Load the roster from `storage`.
    ///
    /// A missing data file yields the sample roster when `seed_sample` is
    /// set, otherwise an empty one. An unreadable file is logged and yields
    /// an empty roster.
    pub fn open(storage: Box<dyn RosterStorage>, audit: Option<AuditLog>, seed_sample: bool) -> Self {
        let path = storage.path().display().to_string();
        let loaded = storage
            .load()
            .map(|stored| stored.map(Roster::from_persons));

        let (roster, source) = match loaded {
            Ok(Some(Ok(roster))) => (roster, RosterSource::Stored),
            Ok(Some(Err(e))) => {
                warn!(path = %path, error = %e, "Data file holds duplicate persons, starting empty");
                (Roster::new(), RosterSource::Unreadable)
            }
            Ok(None) if seed_sample => match Roster::from_persons(sample_persons()) {
                Ok(roster) => (roster, RosterSource::Sample),
                Err(e) => {
                    warn!(error = %e, "Sample roster rejected, starting empty");
                    (Roster::new(), RosterSource::Empty)
                }
            },
            Ok(None) => (Roster::new(), RosterSource::Empty),
            Err(e) => {
                warn!(path = %path, error = %e, "Data file could not be read, starting empty");
                (Roster::new(), RosterSource::Unreadable)
            }
        };

        info!(path = %path, source = ?source, persons = roster.len(), "Roster ready");
        Self {
            roster,
            storage,
            audit,
            source,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn source(&self) -> RosterSource {
        self.source
    }

    /// Parse and run one line of input.
    ///
    /// # Errors
    ///
    /// Parse and command errors leave the roster unchanged.
    /// `DirectoryError::Save` means the command took effect in memory but
    /// the data file was not updated.
    pub fn execute(&mut self, line: &str) -> DirectoryResult<CommandOutcome> {
        let command = parse_command(line)?;
        let word = command.word();
        debug!(command = word, "Executing command");

        let outcome = command.execute(&mut self.roster)?;
        if !outcome.mutated {
            return Ok(outcome);
        }

        if let Err(source) = self.storage.save(self.roster.persons()) {
            warn!(command = word, error = %source, "Save failed");
            return Err(DirectoryError::Save {
                path: self.storage.path().to_path_buf(),
                source,
            });
        }
        self.source = RosterSource::Stored;
        self.record_audit(&outcome.feedback);
        Ok(outcome)
    }

    fn record_audit(&self, feedback: &str) {
        let Some(audit) = &self.audit else {
            return;
        };
        if let Err(e) = audit.record(feedback) {
            warn!(path = %audit.path().display(), error = %e, "Audit write failed");
        }
    }
}
