//! Parsers for `edit` and `update_employee`.

use super::syntax::{
    PREFIX_CATEGORY, PREFIX_DEPARTMENT, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_ROLE,
    PREFIX_SKILL, PREFIX_TEAM, PREFIX_VALUE,
};
use super::tokenizer::{tokenize, ArgumentMultimap};
use super::util::{parse_category, parse_email, parse_index, parse_name, parse_phone, parse_skills_for_edit};
use crate::commands::{edit, Command};
use crate::domain::{Category, CategoryKind, CategorySet, Index};
use crate::error::{ParseError, ParseResult};
use crate::models::{CategoryChange, PersonUpdate};

fn parse_leading_index(map: &ArgumentMultimap, usage: &'static str) -> ParseResult<Index> {
    parse_index(map.preamble()).ok_or(ParseError::InvalidCommandFormat { usage })
}

fn parse_identity(map: &ArgumentMultimap, update: &mut PersonUpdate) -> ParseResult<()> {
    map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL])?;
    update.name = map.value(PREFIX_NAME).map(parse_name).transpose()?;
    update.phone = map.value(PREFIX_PHONE).map(parse_phone).transpose()?;
    update.email = map.value(PREFIX_EMAIL).map(parse_email).transpose()?;
    update.skills = parse_skills_for_edit(map.all_values(PREFIX_SKILL))?;
    Ok(())
}

/// `edit INDEX [n/] [p/] [e/] [c/CATEGORY v/VALUE]... [s/]...`
pub fn parse_edit(args: &str) -> ParseResult<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_CATEGORY, PREFIX_VALUE, PREFIX_SKILL],
    );
    let index = parse_leading_index(&map, edit::EDIT_USAGE)?;

    let mut update = PersonUpdate::default();
    parse_identity(&map, &mut update)?;
    update.categories = parse_category_pairs(
        map.all_values(PREFIX_CATEGORY),
        map.all_values(PREFIX_VALUE),
    )?;

    if !update.is_any_field_edited() {
        return Err(ParseError::NotEdited(edit::EDIT_NOT_EDITED));
    }
    Ok(Command::Edit { index, update })
}

/// `c/` and `v/` values pair up positionally and replace every category.
/// Only blank pairs clears the categories.
fn parse_category_pairs(names: &[String], values: &[String]) -> ParseResult<Option<CategoryChange>> {
    if names.is_empty() && values.is_empty() {
        return Ok(None);
    }
    if names.len() != values.len() {
        return Err(ParseError::MismatchedCategoryValues);
    }

    let blank = |s: &String| s.trim().is_empty();
    if names.iter().all(blank) && values.iter().all(blank) {
        return Ok(Some(CategoryChange::Replace(CategorySet::new())));
    }

    let categories = names
        .iter()
        .zip(values)
        .map(|(name, value)| parse_category(name, value))
        .collect::<ParseResult<CategorySet>>()?;
    Ok(Some(CategoryChange::Replace(categories)))
}

/// `update_employee INDEX [n/] [d/] [t/] [r/] [e/] [p/] [s/]...`
///
/// A blank `d/`, `t/` or `r/` removes that category.
pub fn parse_update(args: &str) -> ParseResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_DEPARTMENT,
            PREFIX_TEAM,
            PREFIX_ROLE,
            PREFIX_EMAIL,
            PREFIX_PHONE,
            PREFIX_SKILL,
        ],
    );
    let index = parse_leading_index(&map, edit::UPDATE_USAGE)?;

    let mut update = PersonUpdate::default();
    parse_identity(&map, &mut update)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_DEPARTMENT, PREFIX_TEAM, PREFIX_ROLE])?;

    let mut set = Vec::new();
    let mut remove = Vec::new();
    for (kind, prefix) in [
        (CategoryKind::Department, PREFIX_DEPARTMENT),
        (CategoryKind::Team, PREFIX_TEAM),
        (CategoryKind::Role, PREFIX_ROLE),
    ] {
        match map.value(prefix).map(str::trim) {
            None => {}
            Some("") => remove.push(kind.label().to_string()),
            Some(value) => set.push(Category::of_kind(kind, value)?),
        }
    }
    if !set.is_empty() || !remove.is_empty() {
        update.categories = Some(CategoryChange::Patch { set, remove });
    }

    if !update.is_any_field_edited() {
        return Err(ParseError::NotEdited(edit::UPDATE_NOT_EDITED));
    }
    Ok(Command::Update { index, update })
}
