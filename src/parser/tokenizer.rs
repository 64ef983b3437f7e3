//! Splits command arguments into a preamble and prefixed values.
//!
//! `" 1 n/Alice s/java s/python"` with prefixes `n/` and `s/` yields the
//! preamble `" 1 "`, `n/ -> ["Alice "]` and `s/ -> ["java ", "python"]`.
//! A prefix is only recognised when preceded by whitespace, so `skills/`
//! never matches `s/`. Values are returned untrimmed.

use super::syntax::Prefix;
use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;

/// Prefixed argument values in the order they appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order. Empty if absent.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fail if any of `prefixes` occurred more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> ParseResult<()> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenize `args` against the prefixes a command recognises.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {args}");

    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| find_prefix_positions(&padded, *prefix))
        .collect();
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(padded.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: padded[1..preamble_end].to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(padded.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(padded[value_start..value_end].to_string());
    }

    multimap
}

/// Byte offsets of every `prefix` that follows whitespace.
fn find_prefix_positions(padded: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    let marker = prefix.as_str();
    let bytes = padded.as_bytes();
    padded
        .match_indices(marker)
        .filter(|(start, _)| *start > 0 && bytes[start - 1].is_ascii_whitespace())
        .map(|(start, _)| (start, prefix))
        .collect()
}
