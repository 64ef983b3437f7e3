//! Parser for `delete`.

use super::util::parse_index;
use crate::commands::{delete, Command};
use crate::error::{ParseError, ParseResult};

pub fn parse(args: &str) -> ParseResult<Command> {
    parse_index(args)
        .map(Command::Delete)
        .ok_or(ParseError::InvalidCommandFormat {
            usage: delete::DELETE_USAGE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Index;

    #[test]
    fn test_parse_delete() {
        assert_eq!(parse(" 1"), Ok(Command::Delete(Index::from_zero_based(0))));
        assert!(parse(" a").is_err());
        assert!(parse(" 0").is_err());
        assert!(parse("").is_err());
    }
}
