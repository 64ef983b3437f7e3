//! Error types for the staff directory.
//!
//! This module defines custom error types using `thiserror`. Every error is
//! recovered at the command boundary and its `Display` text is what the
//! user sees.

use crate::domain::ValidationError;
use crate::parser::syntax::Prefix;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a command line into a [`crate::commands::Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing or malformed index, missing required field, stray preamble
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A single-valued prefix was given more than once
    #[error("Multiple values specified for the following single-valued field(s): {}", join_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),

    /// An edit-style command supplied no field
    #[error("{0}")]
    NotEdited(&'static str),

    /// The command word is not recognised
    #[error("Unknown command")]
    UnknownCommand,

    /// `assign` with a category outside Department/Team/Role
    #[error("Category must be one of Team/Role/Department")]
    InvalidCategoryName,

    /// `listbycategory` with a category outside role/team/department
    #[error("Category must be one of: role, team, department.")]
    InvalidListCategory,

    /// `edit` with a different number of `c/` and `v/` values
    #[error("Every c/CATEGORY must be paired with a v/VALUE.")]
    MismatchedCategoryValues,
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Business-rule failures while executing a command against the roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("This person already exists in the address book.")]
    DuplicatePerson,

    #[error("This email is already used by another person in the address book.")]
    DuplicateEmail,

    #[error("This phone number is already used by another person in the address book.")]
    DuplicatePhone,

    /// Index past the end of the filtered view
    #[error("The person index provided is invalid")]
    InvalidIndex,

    #[error("No person has the following skill(s): {}", .0.join(", "))]
    SkillNotFound(Vec<String>),

    #[error("There is no pending deletion to confirm or cancel.")]
    NoPendingDeletion,

    /// The pending person was removed or changed before confirmation
    #[error("The person pending deletion is no longer in the address book.")]
    PendingTargetMissing,
}

/// Errors reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was well-formed JSON but not a valid person
    #[error("Illegal value in data file: {0}")]
    InvalidData(String),

    #[error("Person's {0} field is missing!")]
    MissingField(&'static str),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Everything the dispatcher can report for one command line.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command ran in memory but the data file could not be written
    #[error("Could not save data to file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: StorageError,
    },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_EMAIL, PREFIX_NAME};

    #[test]
    fn test_error_display() {
        let err = ParseError::InvalidCommandFormat { usage: "find: usage" };
        assert_eq!(err.to_string(), "Invalid command format! \nfind: usage");

        let err = ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_EMAIL]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ e/"
        );

        let err = CommandError::SkillNotFound(vec!["cobol".into(), "fortran".into()]);
        assert_eq!(
            err.to_string(),
            "No person has the following skill(s): cobol, fortran"
        );

        let err = StorageError::MissingField("phone");
        assert_eq!(err.to_string(), "Person's phone field is missing!");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let inner = ValidationError::InvalidSkill("c++".into());
        let err = ParseError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_save_error_names_path() {
        let err = DirectoryError::Save {
            path: PathBuf::from("data/out.json"),
            source: StorageError::InvalidData("bad".into()),
        };
        assert!(err.to_string().contains("data/out.json"));
        assert!(err.to_string().contains("bad"));
    }
}
