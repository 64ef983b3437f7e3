//! `edit` and `update_employee`.
//!
//! Both locate a person in the filtered view, merge a [`PersonUpdate`] over
//! it and replace it in place. They differ only in how categories are
//! supplied, which the parser has already folded into the update.

use super::CommandOutcome;
use crate::domain::Index;
use crate::error::{CommandError, CommandResult};
use crate::models::{Person, PersonUpdate};
use crate::roster::Roster;

pub const EDIT_COMMAND_WORD: &str = "edit";
pub const UPDATE_COMMAND_WORD: &str = "update_employee";

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number \
used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] \
[c/CATEGORY v/VALUE]... [s/SKILL]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const UPDATE_USAGE: &str = "update_employee: Updates the details of the person identified by the \
index number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [d/DEPARTMENT] [t/TEAM] [r/ROLE] \
[e/EMAIL] [p/PHONE] [s/SKILL]...\n\
Example: update_employee 1 e/johndoe@example.com p/91234567";

pub const EDIT_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const UPDATE_NOT_EDITED: &str =
    "No fields specified to update. At least one field (e.g., n/NAME, d/DEPARTMENT, s/SKILLS) must be included.";

pub const EDIT_SUCCESS: &str = "Edited Person";
pub const UPDATE_SUCCESS: &str = "Updated Person";

pub fn execute(
    roster: &mut Roster,
    index: Index,
    update: &PersonUpdate,
    success: &str,
) -> CommandResult<CommandOutcome> {
    let original = roster.person_at(index)?.clone();
    let edited = update.apply(&original);

    check_collisions(roster, &original, &edited)?;

    let feedback = format!("{success}: {edited}");
    roster.set_person(&original, edited)?;
    roster.show_all();
    Ok(CommandOutcome::mutated(feedback))
}

/// Reject an edit that makes `edited` clash with anyone other than
/// `original`. Weak identity is reported first, then email, then phone.
/// Email and phone only count when the edit changes them, since `add`
/// allows persons to share either.
fn check_collisions(roster: &Roster, original: &Person, edited: &Person) -> CommandResult<()> {
    let others: Vec<&Person> = roster.persons().iter().filter(|p| *p != original).collect();

    if others.iter().any(|p| p.is_same_person(edited)) {
        return Err(CommandError::DuplicatePerson);
    }
    if edited.email() != original.email() && others.iter().any(|p| p.email() == edited.email()) {
        return Err(CommandError::DuplicateEmail);
    }
    if edited.phone() != original.phone() && others.iter().any(|p| p.phone() == edited.phone()) {
        return Err(CommandError::DuplicatePhone);
    }
    Ok(())
}
