//! Parsers for `list` and `listbycategory`.

use super::syntax::{PREFIX_CATEGORY, PREFIX_SKILL, PREFIX_SKILLS_LEGACY};
use super::tokenizer::tokenize;
use crate::commands::{list, Command, ListQuery};
use crate::domain::CategoryKind;
use crate::error::{ParseError, ParseResult};
use crate::matching::{ListFilters, SkillOrCategoryExact};

/// `list [s/SKILL]... [c/CATEGORY]...` or the legacy `list skills/SKILL...`.
///
/// The two forms cannot be mixed. Blank keywords are ignored.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_SKILL, PREFIX_CATEGORY, PREFIX_SKILLS_LEGACY]);
    let invalid = ParseError::InvalidCommandFormat {
        usage: list::LIST_USAGE,
    };
    if !map.preamble().trim().is_empty() {
        return Err(invalid);
    }

    let skills = map.all_values(PREFIX_SKILL);
    let categories = map.all_values(PREFIX_CATEGORY);
    let legacy = map.all_values(PREFIX_SKILLS_LEGACY);

    if !legacy.is_empty() {
        if !skills.is_empty() || !categories.is_empty() {
            return Err(invalid);
        }
        return Ok(Command::List(ListQuery::Exact(SkillOrCategoryExact::new(legacy))));
    }

    let filters = ListFilters::new(skills, categories);
    if filters.is_unconstrained() {
        return Ok(Command::List(ListQuery::All));
    }
    Ok(Command::List(ListQuery::Combined(filters)))
}

/// `listbycategory c/{role|team|department}`
pub fn parse_by_category(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_CATEGORY]);
    let invalid = ParseError::InvalidCommandFormat {
        usage: list::LIST_BY_CATEGORY_USAGE,
    };
    if !map.preamble().trim().is_empty() {
        return Err(invalid);
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CATEGORY])?;
    let category = map.value(PREFIX_CATEGORY).ok_or(invalid)?;

    CategoryKind::parse(category)
        .map(Command::ListByCategory)
        .ok_or(ParseError::InvalidListCategory)
}
