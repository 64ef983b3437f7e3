//! `delete`, `confirm` and `cancel`: the two-step deletion.

use super::CommandOutcome;
use crate::domain::Index;
use crate::error::{CommandError, CommandResult};
use crate::roster::Roster;
use tracing::debug;

pub const DELETE_COMMAND_WORD: &str = "delete";
pub const CONFIRM_COMMAND_WORD: &str = "confirm";
pub const CANCEL_COMMAND_WORD: &str = "cancel";

pub const DELETE_USAGE: &str = "delete: Marks the person identified by the index number used in the \
displayed person list for deletion. Enter 'confirm' to delete or 'cancel' to keep them.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const CONFIRM_USAGE: &str = "confirm: Deletes the person marked by the last delete.";
pub const CANCEL_USAGE: &str = "cancel: Keeps the person marked by the last delete.";

/// Mark the person at `index` as pending deletion.
pub fn request(roster: &mut Roster, index: Index) -> CommandResult<CommandOutcome> {
    let target = roster.person_at(index)?.clone();
    let summary = target.summary();
    if let Some(previous) = roster.mark_for_deletion(target) {
        debug!(previous = %previous.name(), "Replacing pending deletion");
    }
    Ok(CommandOutcome::unchanged(format!(
        "Delete {summary}? Enter 'confirm' to delete or 'cancel' to keep."
    )))
}

pub fn confirm(roster: &mut Roster) -> CommandResult<CommandOutcome> {
    let target = roster.take_pending().ok_or(CommandError::NoPendingDeletion)?;
    let removed = roster
        .remove(&target)
        .ok_or(CommandError::PendingTargetMissing)?;
    Ok(CommandOutcome::mutated(format!(
        "Employee deleted: {}",
        removed.summary()
    )))
}

pub fn cancel(roster: &mut Roster) -> CommandResult<CommandOutcome> {
    let target = roster.take_pending().ok_or(CommandError::NoPendingDeletion)?;
    Ok(CommandOutcome::unchanged(format!(
        "Employee deletion cancelled: {}",
        target.summary()
    )))
}
