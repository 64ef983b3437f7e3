//! Parser for `add_employee`.

use super::syntax::{
    PREFIX_DEPARTMENT, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_ROLE, PREFIX_SKILL, PREFIX_TEAM,
};
use super::tokenizer::tokenize;
use super::util::{parse_email, parse_name, parse_optional_kind, parse_phone, parse_skills};
use crate::commands::{add, Command};
use crate::domain::{CategoryKind, CategorySet};
use crate::error::{ParseError, ParseResult};
use crate::models::Person;

/// Parse `n/NAME p/PHONE e/EMAIL [d/] [t/] [r/] [s/]...`.
///
/// Name, phone and email are required and single-valued. Department, team
/// and role are optional; blank means not given. Blank skills are skipped.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_DEPARTMENT,
            PREFIX_TEAM,
            PREFIX_ROLE,
            PREFIX_SKILL,
        ],
    );

    let invalid = ParseError::InvalidCommandFormat { usage: add::USAGE };
    let (Some(name), Some(phone), Some(email)) = (
        map.value(PREFIX_NAME),
        map.value(PREFIX_PHONE),
        map.value(PREFIX_EMAIL),
    ) else {
        return Err(invalid);
    };
    if !map.preamble().trim().is_empty() {
        return Err(invalid);
    }

    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_DEPARTMENT,
        PREFIX_TEAM,
        PREFIX_ROLE,
    ])?;

    let name = parse_name(name)?;
    let phone = parse_phone(phone)?;
    let email = parse_email(email)?;

    let mut categories = CategorySet::new();
    for (kind, prefix) in [
        (CategoryKind::Department, PREFIX_DEPARTMENT),
        (CategoryKind::Team, PREFIX_TEAM),
        (CategoryKind::Role, PREFIX_ROLE),
    ] {
        if let Some(category) = parse_optional_kind(kind, map.value(prefix))? {
            categories.insert(category);
        }
    }

    let skills = parse_skills(map.all_values(PREFIX_SKILL))?;

    Ok(Command::Add(Person::new(name, phone, email, categories, skills)))
}
