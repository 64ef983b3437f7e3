//! `find`

use super::CommandOutcome;
use crate::domain::CategoryKind;
use crate::error::CommandResult;
use crate::matching::{NameContainsKeywords, PersonFilter};
use crate::roster::Roster;
use std::collections::BTreeMap;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified keywords \
(case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

const NO_DEPARTMENT: &str = "N/A";

/// Filter by name, then append how many matches fall in each department.
pub fn execute(roster: &mut Roster, predicate: NameContainsKeywords) -> CommandResult<CommandOutcome> {
    roster.set_filter(PersonFilter::Name(predicate));

    let matches = roster.filtered();
    let mut departments: BTreeMap<&str, usize> = BTreeMap::new();
    for person in &matches {
        let department = person
            .category_value(CategoryKind::Department)
            .unwrap_or(NO_DEPARTMENT);
        *departments.entry(department).or_default() += 1;
    }

    let mut feedback = format!("{} persons listed!", matches.len());
    for (department, count) in departments {
        feedback.push_str(&format!("\n {department}: {count} persons"));
    }
    Ok(CommandOutcome::listing(feedback))
}
