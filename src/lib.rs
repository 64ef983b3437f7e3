//! Staff Directory - a command-line employee directory.
//!
//! Employees carry a name, phone, email, a set of categories
//! (Department/Team/Role or any other name) and a set of skills. Users type
//! prefixed commands such as `add_employee n/Alice p/91234567 e/alice@example.com s/java`
//! or `list s/java c/engineering`; the roster is saved as JSON after every
//! change.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, skill, category, index)
//! - **models**: The person aggregate and partial updates
//! - **matching**: Filter predicates for the displayed list
//! - **roster**: In-memory roster, filtered view and pending deletion
//! - **parser**: Prefix tokenizer and per-command parsers
//! - **commands**: Command union and execution
//! - **storage**: JSON persistence
//! - **services**: Dispatcher tying parsing, execution, saving and auditing together
//! - **audit**: Timestamped trail of changes
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod audit;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod parser;
pub mod roster;
pub mod sample;
pub mod services;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use audit::AuditLog;
pub use commands::{Command, CommandOutcome};
pub use config::Config;
pub use error::{CommandError, ConfigError, DirectoryError, ParseError, StorageError};
pub use models::{Person, PersonUpdate};
pub use parser::parse_command;
pub use roster::Roster;
pub use services::{DirectoryService, RosterSource};
pub use storage::{JsonRosterStorage, RosterStorage};
