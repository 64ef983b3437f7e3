//! Value parsers shared by the command parsers.

use crate::domain::{Category, CategoryKind, Email, Index, Name, Phone, Skill, SkillSet};
use crate::error::ParseResult;

/// Parse a one-based display index. The trimmed text must be a non-zero
/// unsigned integer with no sign.
pub fn parse_index(text: &str) -> Option<Index> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().and_then(Index::from_one_based)
}

pub fn parse_name(text: &str) -> ParseResult<Name> {
    Ok(Name::new(text)?)
}

pub fn parse_phone(text: &str) -> ParseResult<Phone> {
    Ok(Phone::new(text)?)
}

pub fn parse_email(text: &str) -> ParseResult<Email> {
    Ok(Email::new(text)?)
}

pub fn parse_skill(text: &str) -> ParseResult<Skill> {
    Ok(Skill::new(text)?)
}

pub fn parse_category(name: &str, value: &str) -> ParseResult<Category> {
    Ok(Category::new(name, value)?)
}

/// Skills for a new person. Blank values are skipped.
pub fn parse_skills(values: &[String]) -> ParseResult<SkillSet> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| parse_skill(v))
        .collect()
}

/// Skills for an edit.
///
/// - no `s/` at all: `None`, leave skills unchanged
/// - only blank `s/`: `Some(empty)`, clear skills
/// - otherwise every value must be a valid skill
pub fn parse_skills_for_edit(values: &[String]) -> ParseResult<Option<SkillSet>> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.iter().all(|v| v.trim().is_empty()) {
        return Ok(Some(SkillSet::new()));
    }
    values.iter().map(|v| parse_skill(v)).collect::<ParseResult<_>>().map(Some)
}

/// An optional fixed-dimension category. A blank value means none.
pub fn parse_optional_kind(kind: CategoryKind, value: Option<&str>) -> ParseResult<Option<Category>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => Ok(Some(Category::of_kind(kind, v)?)),
    }
}

/// Whitespace-separated keywords, for `find`.
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
