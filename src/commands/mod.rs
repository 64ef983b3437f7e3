//! Commands: one validated user action each.
//!
//! A [`Command`] is produced by [`crate::parser::parse_command`] and runs
//! against a [`Roster`]. Every command either succeeds with a
//! [`CommandOutcome`] or fails with a [`CommandError`] leaving the roster
//! untouched.

pub mod add;
pub mod assign;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod list;

use crate::domain::{Category, CategoryKind, Index};
use crate::error::CommandResult;
use crate::matching::NameContainsKeywords;
use crate::models::{Person, PersonUpdate};
use crate::roster::Roster;

pub use list::ListQuery;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    /// `edit`: categories given as `c/ v/` pairs replace the whole set
    Edit { index: Index, update: PersonUpdate },
    /// `update_employee`: `d/ t/ r/` patch single dimensions
    Update { index: Index, update: PersonUpdate },
    Delete(Index),
    Confirm,
    Cancel,
    List(ListQuery),
    ListByCategory(CategoryKind),
    Find(NameContainsKeywords),
    Assign { index: Index, category: Category },
    Help,
    Exit,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    /// The roster changed and must be saved
    pub mutated: bool,
    /// The session should end
    pub exit: bool,
    /// The displayed list changed and should be shown again
    pub show_roster: bool,
}

impl CommandOutcome {
    pub fn unchanged(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            mutated: false,
            exit: false,
            show_roster: false,
        }
    }

    pub fn mutated(feedback: impl Into<String>) -> Self {
        Self {
            mutated: true,
            show_roster: true,
            ..Self::unchanged(feedback)
        }
    }

    /// The filter changed but nothing was modified.
    pub fn listing(feedback: impl Into<String>) -> Self {
        Self {
            show_roster: true,
            ..Self::unchanged(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::unchanged(feedback)
        }
    }
}

impl Command {
    /// The command word that produced this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Edit { .. } => edit::EDIT_COMMAND_WORD,
            Self::Update { .. } => edit::UPDATE_COMMAND_WORD,
            Self::Delete(_) => delete::DELETE_COMMAND_WORD,
            Self::Confirm => delete::CONFIRM_COMMAND_WORD,
            Self::Cancel => delete::CANCEL_COMMAND_WORD,
            Self::List(_) => list::LIST_COMMAND_WORD,
            Self::ListByCategory(_) => list::LIST_BY_CATEGORY_COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::Assign { .. } => assign::COMMAND_WORD,
            Self::Help => help::HELP_COMMAND_WORD,
            Self::Exit => help::EXIT_COMMAND_WORD,
        }
    }

    pub fn execute(self, roster: &mut Roster) -> CommandResult<CommandOutcome> {
        match self {
            Self::Add(person) => add::execute(roster, person),
            Self::Edit { index, update } => {
                edit::execute(roster, index, &update, edit::EDIT_SUCCESS)
            }
            Self::Update { index, update } => {
                edit::execute(roster, index, &update, edit::UPDATE_SUCCESS)
            }
            Self::Delete(index) => delete::request(roster, index),
            Self::Confirm => delete::confirm(roster),
            Self::Cancel => delete::cancel(roster),
            Self::List(query) => list::execute(roster, query),
            Self::ListByCategory(kind) => list::execute_by_category(roster, kind),
            Self::Find(predicate) => find::execute(roster, predicate),
            Self::Assign { index, category } => assign::execute(roster, index, category),
            Self::Help => Ok(help::help()),
            Self::Exit => Ok(help::exit()),
        }
    }
}
