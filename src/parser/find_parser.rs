//! Parser for `find`.

use super::util::split_keywords;
use crate::commands::{find, Command};
use crate::error::{ParseError, ParseResult};
use crate::matching::NameContainsKeywords;

pub fn parse(args: &str) -> ParseResult<Command> {
    let keywords = split_keywords(args);
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat { usage: find::USAGE });
    }
    Ok(Command::Find(NameContainsKeywords::new(&keywords)))
}
