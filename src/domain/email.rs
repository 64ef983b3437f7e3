//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// local-part: alphanumeric runs joined by single special characters (+_.-)
// domain: labels of alphanumerics with inner hyphens, last label >= 2 chars
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:-?[A-Za-z0-9])*\.)*[A-Za-z0-9](?:-?[A-Za-z0-9])+$",
    )
    .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
///
/// # Example
///
/// ```
/// use staff_directory::domain::Email;
///
/// let email = Email::new("alexyeoh@example.com").unwrap();
/// assert_eq!(email.as_str(), "alexyeoh@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Create a new Email, trimming and validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly one '@' separating a local part and a domain
    /// - Local part: alphanumerics, optionally joined by one of `+_.-`
    /// - Domain: period-separated labels, hyphens only between alphanumerics,
    ///   last label at least 2 characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Validate email format.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
