//! Domain validation errors.

use std::fmt;

/// Constraint message for [`Name`](super::Name).
pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

/// Constraint message for [`Phone`](super::Phone).
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";

/// Constraint message for [`Email`](super::Email).
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.- \
and may not start or end with a special character. The domain is made of labels separated \
by periods; each label starts and ends with an alphanumeric character, may contain hyphens, \
and the last label is at least 2 characters long";

/// Constraint message for [`Skill`](super::Skill).
pub const SKILL_CONSTRAINTS: &str = "Skills names should be alphanumeric and should not be blank";

/// Constraint message for [`Category`](super::Category).
pub const CATEGORY_CONSTRAINTS: &str = "Category/Value should be alphanumeric and spaces";

/// Errors that can occur during domain value object validation.
///
/// Each variant keeps the rejected input; `Display` renders only the
/// constraint so the message is stable for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided skill name is invalid.
    InvalidSkill(String),

    /// The provided category name or value is invalid.
    InvalidCategory(String),
}

impl ValidationError {
    /// The constraint message for the failing field.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => NAME_CONSTRAINTS,
            Self::InvalidPhone(_) => PHONE_CONSTRAINTS,
            Self::InvalidEmail(_) => EMAIL_CONSTRAINTS,
            Self::InvalidSkill(_) => SKILL_CONSTRAINTS,
            Self::InvalidCategory(_) => CATEGORY_CONSTRAINTS,
        }
    }

    /// The input that failed validation.
    pub fn rejected(&self) -> &str {
        match self {
            Self::InvalidName(v)
            | Self::InvalidPhone(v)
            | Self::InvalidEmail(v)
            | Self::InvalidSkill(v)
            | Self::InvalidCategory(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constraint())
    }
}

impl std::error::Error for ValidationError {}
