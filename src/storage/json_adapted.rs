//! JSON-friendly mirrors of the model types.
//!
//! These accept everything older data files contain and are converted into
//! validated models with [`JsonAdaptedPerson::to_model`].

use crate::domain::{Category, CategorySet, Email, Name, Phone, Skill, SkillSet};
use crate::error::{StorageError, StorageResult};
use crate::models::Person;
use serde::{Deserialize, Serialize};

/// The top-level document: `{ "persons": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRosterDocument {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

/// A skill entry. Written as a plain string; older files use
/// `{"name": ...}` or `{"tagName": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonAdaptedSkill {
    Plain(String),
    Named {
        name: String,
    },
    Tagged {
        #[serde(rename = "tagName")]
        tag_name: String,
    },
}

impl JsonAdaptedSkill {
    fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Named { name: text } | Self::Tagged { tag_name: text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedCategory {
    pub category: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonAdaptedPerson {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    #[serde(default)]
    pub skills: Vec<JsonAdaptedSkill>,

    #[serde(default)]
    pub categories: Vec<JsonAdaptedCategory>,

    /// Legacy tags, read as extra skills
    #[serde(default, skip_serializing)]
    pub tagged: Vec<JsonAdaptedSkill>,

    /// Legacy address, read and dropped
    #[serde(default, skip_serializing)]
    pub address: Option<serde_json::Value>,
}

fn invalid(err: impl std::fmt::Display) -> StorageError {
    StorageError::InvalidData(err.to_string())
}

impl JsonAdaptedPerson {
    pub fn from_model(person: &Person) -> Self {
        Self {
            name: Some(person.name().as_str().to_string()),
            phone: Some(person.phone().as_str().to_string()),
            email: Some(person.email().as_str().to_string()),
            skills: person
                .skills()
                .iter()
                .map(|s| JsonAdaptedSkill::Plain(s.as_str().to_string()))
                .collect(),
            categories: person
                .categories()
                .iter()
                .map(|c| JsonAdaptedCategory {
                    category: Some(c.name().to_string()),
                    value: Some(c.value().to_string()),
                })
                .collect(),
            tagged: Vec::new(),
            address: None,
        }
    }

    /// Validate and convert into a [`Person`].
    ///
    /// # Errors
    ///
    /// `MissingField` when name, phone or email is absent, `InvalidData`
    /// with the field's constraint message when a value fails validation.
    pub fn to_model(&self) -> StorageResult<Person> {
        let name = self.name.as_deref().ok_or(StorageError::MissingField("name"))?;
        let phone = self.phone.as_deref().ok_or(StorageError::MissingField("phone"))?;
        let email = self.email.as_deref().ok_or(StorageError::MissingField("email"))?;

        let name = Name::new(name).map_err(invalid)?;
        let phone = Phone::new(phone).map_err(invalid)?;
        let email = Email::new(email).map_err(invalid)?;

        let skills = self
            .skills
            .iter()
            .chain(&self.tagged)
            .map(|s| Skill::new(s.text()).map_err(invalid))
            .collect::<StorageResult<SkillSet>>()?;

        let categories = self
            .categories
            .iter()
            .map(|c| {
                let name = c.category.as_deref().ok_or(StorageError::MissingField("category"))?;
                let value = c.value.as_deref().ok_or(StorageError::MissingField("value"))?;
                Category::new(name, value).map_err(invalid)
            })
            .collect::<StorageResult<CategorySet>>()?;

        Ok(Person::new(name, phone, email, categories, skills))
    }
}
