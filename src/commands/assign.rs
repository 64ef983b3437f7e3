//! `assign`

use super::CommandOutcome;
use crate::domain::{Category, Index};
use crate::error::CommandResult;
use crate::roster::Roster;

pub const COMMAND_WORD: &str = "assign";

pub const USAGE: &str = "assign: Assigns a category to the person identified by the index number \
used in the displayed person list. An existing value for the same category is replaced.\n\
Parameters: INDEX (must be a positive integer) c/CATEGORY v/VALUE\n\
Valid categories: Department, Team, Role\n\
Example: assign 1 c/Role v/Manager";

/// Set `category` on the person at `index`, replacing any category with
/// the same name.
pub fn execute(roster: &mut Roster, index: Index, category: Category) -> CommandResult<CommandOutcome> {
    let original = roster.person_at(index)?.clone();
    let edited = original.with_category(category);

    let feedback = format!("Assigned category to Person: {edited}");
    roster.set_person(&original, edited)?;
    roster.show_all();
    Ok(CommandOutcome::mutated(feedback))
}
