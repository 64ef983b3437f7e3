//! Command-line parsing.
//!
//! A line is split into a command word and its argument text; the word
//! selects a per-command parser that tokenizes the arguments with exactly
//! the prefixes that command understands.

pub mod add_parser;
pub mod assign_parser;
pub mod delete_parser;
pub mod edit_parser;
pub mod find_parser;
pub mod list_parser;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use crate::commands::{add, assign, delete, edit, find, help, list, Command};
use crate::error::{ParseError, ParseResult};

pub use tokenizer::{tokenize, ArgumentMultimap};

/// Parse one line of user input.
pub fn parse_command(line: &str) -> ParseResult<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: help::HELP_USAGE,
        });
    }

    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => add_parser::parse(args),
        edit::EDIT_COMMAND_WORD => edit_parser::parse_edit(args),
        edit::UPDATE_COMMAND_WORD => edit_parser::parse_update(args),
        delete::DELETE_COMMAND_WORD => delete_parser::parse(args),
        delete::CONFIRM_COMMAND_WORD => without_arguments(args, Command::Confirm, delete::CONFIRM_USAGE),
        delete::CANCEL_COMMAND_WORD => without_arguments(args, Command::Cancel, delete::CANCEL_USAGE),
        list::LIST_COMMAND_WORD => list_parser::parse(args),
        list::LIST_BY_CATEGORY_COMMAND_WORD => list_parser::parse_by_category(args),
        find::COMMAND_WORD => find_parser::parse(args),
        assign::COMMAND_WORD => assign_parser::parse(args),
        help::HELP_COMMAND_WORD => Ok(Command::Help),
        help::EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Accept a command word only when nothing follows it.
fn without_arguments(args: &str, command: Command, usage: &'static str) -> ParseResult<Command> {
    if args.trim().is_empty() {
        Ok(command)
    } else {
        Err(ParseError::InvalidCommandFormat { usage })
    }
}
