//! Skill value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

static SKILL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile skill regex"));

/// The skills held by one person, ordered case-insensitively.
pub type SkillSet = BTreeSet<Skill>;

/// A skill label such as `java` or `Python3`.
///
/// Skills are a single alphanumeric word. The original spelling is kept for
/// display, but equality, hashing and ordering ignore case, so `Java` and
/// `java` are the same skill and a [`SkillSet`] holds at most one of them.
///
/// # Example
///
/// ```
/// use staff_directory::domain::Skill;
///
/// assert_eq!(Skill::new("Java").unwrap(), Skill::new("java").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Skill(String);

impl Skill {
    /// Create a new Skill, trimming and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSkill` if the trimmed input is empty or
    /// not purely alphanumeric.
    pub fn new(skill: impl Into<String>) -> Result<Self, ValidationError> {
        let skill = skill.into();
        let trimmed = skill.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidSkill(skill));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns true if `skill` is a valid skill name.
    pub fn is_valid(skill: &str) -> bool {
        SKILL_REGEX.is_match(skill)
    }

    /// Get the skill as a string slice, in its original spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for comparisons.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl PartialOrd for Skill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Skill {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl Serialize for Skill {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Skill::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
