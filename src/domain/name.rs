//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex"));

/// An employee's full name.
///
/// Alphanumeric characters and spaces only, and it must not start with a
/// space. Input is trimmed before validation.
///
/// # Example
///
/// ```
/// use staff_directory::domain::Name;
///
/// let name = Name::new("  Alex Yeoh ").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeoh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, trimming and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the trimmed input is blank or
    /// contains characters other than letters, digits and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns true if `name` is an acceptable (already trimmed) name.
    pub fn is_valid(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against the full name.
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.0.to_lowercase().contains(needle_lower)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
