//! Command-line prefix syntax.

use std::fmt;

/// A literal marker such as `n/` that introduces one argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_DEPARTMENT: Prefix = Prefix::new("d/");
pub const PREFIX_TEAM: Prefix = Prefix::new("t/");
pub const PREFIX_ROLE: Prefix = Prefix::new("r/");
pub const PREFIX_SKILL: Prefix = Prefix::new("s/");
pub const PREFIX_CATEGORY: Prefix = Prefix::new("c/");
pub const PREFIX_VALUE: Prefix = Prefix::new("v/");

/// Legacy long form accepted by `list` for the exact skill filter.
pub const PREFIX_SKILLS_LEGACY: Prefix = Prefix::new("skills/");
