//! Parser for `assign`.

use super::syntax::{PREFIX_CATEGORY, PREFIX_VALUE};
use super::tokenizer::tokenize;
use super::util::parse_index;
use crate::commands::{assign, Command};
use crate::domain::{Category, CategoryKind, ValidationError};
use crate::error::{ParseError, ParseResult};

/// `assign INDEX c/CATEGORY v/VALUE`
///
/// The category must name a [`CategoryKind`] (any case) and is stored under
/// its capitalized label. The value may be any alphanumeric-plus-space text.
pub fn parse(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_CATEGORY, PREFIX_VALUE]);
    let index = parse_index(map.preamble()).ok_or(ParseError::InvalidCommandFormat {
        usage: assign::USAGE,
    })?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_CATEGORY, PREFIX_VALUE])?;

    let name = map.value(PREFIX_CATEGORY).unwrap_or_default().trim();
    let value = map.value(PREFIX_VALUE).unwrap_or_default().trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidCategory(name.to_string()).into());
    }
    if value.is_empty() {
        return Err(ValidationError::InvalidCategory(value.to_string()).into());
    }

    let kind = CategoryKind::parse(name).ok_or(ParseError::InvalidCategoryName)?;
    let category = Category::of_kind(kind, value)?;
    Ok(Command::Assign { index, category })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Index;

    #[test]
    fn test_parse_assign_normalizes_category() {
        let command = parse(" 2 c/rOLE v/Team Lead").unwrap();
        assert_eq!(
            command,
            Command::Assign {
                index: Index::from_zero_based(1),
                category: Category::new("Role", "Team Lead").unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_assign_errors() {
        assert_eq!(
            parse(" c/Role v/Lead"),
            Err(ParseError::InvalidCommandFormat { usage: assign::USAGE })
        );
        assert_eq!(parse(" 1 c/Location v/HQ"), Err(ParseError::InvalidCategoryName));
        assert!(matches!(
            parse(" 1 c/Role v/"),
            Err(ParseError::Validation(ValidationError::InvalidCategory(_)))
        ));
        assert!(matches!(
            parse(" 1 c/Role"),
            Err(ParseError::Validation(ValidationError::InvalidCategory(_)))
        ));
        assert!(matches!(
            parse(" 1 c/Role v/Lead!"),
            Err(ParseError::Validation(ValidationError::InvalidCategory(_)))
        ));
    }
}
