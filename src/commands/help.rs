//! `help` and `exit`.

use super::{add, assign, delete, edit, find, list, CommandOutcome};

pub const HELP_COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

const USAGES: [&str; 11] = [
    add::USAGE,
    edit::EDIT_USAGE,
    edit::UPDATE_USAGE,
    delete::DELETE_USAGE,
    delete::CONFIRM_USAGE,
    delete::CANCEL_USAGE,
    list::LIST_USAGE,
    list::LIST_BY_CATEGORY_USAGE,
    find::USAGE,
    assign::USAGE,
    HELP_USAGE,
];

pub fn help() -> CommandOutcome {
    let mut feedback = USAGES.join("\n\n");
    feedback.push_str("\n\nexit: Exits the program.");
    CommandOutcome::unchanged(feedback)
}

pub fn exit() -> CommandOutcome {
    CommandOutcome::exit("Exiting staff directory as requested ...")
}
