//! Person model representing one employee in the directory.

use crate::domain::{Category, CategoryKind, CategorySet, Email, Name, Phone, Skill, SkillSet};
use std::fmt;

/// An employee record.
///
/// Immutable once built: edits produce a new `Person`. Two notions of
/// equality apply:
/// - `==` compares every field (full equality)
/// - [`Person::is_same_person`] compares only name, phone and email, and is
///   what duplicate detection uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    categories: CategorySet,
    skills: SkillSet,
}

impl Person {
    /// Create a person from validated parts.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        categories: CategorySet,
        skills: SkillSet,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            categories,
            skills,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Value of the category on a fixed dimension, if the person has one.
    pub fn category_value(&self, kind: CategoryKind) -> Option<&str> {
        self.categories.value_of(kind)
    }

    /// Weak identity: same name, phone and email.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }

    /// A copy of this person with `category` added, replacing any existing
    /// category of the same name.
    pub fn with_category(&self, category: Category) -> Person {
        let mut categories = self.categories.clone();
        categories.insert(category);
        Person {
            categories,
            ..self.clone()
        }
    }

    /// One-line summary used in confirmations and the audit trail, e.g.
    /// `David Li (Categories: Department: Marketing; Skills: csharp)`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.categories.is_empty() {
            parts.push(format!("Categories: {}", join(self.categories.iter())));
        }
        if !self.skills.is_empty() {
            parts.push(format!("Skills: {}", join(self.skills.iter())));
        }
        if parts.is_empty() {
            return self.name.to_string();
        }
        format!("{} ({})", self.name, parts.join("; "))
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

/// Full feedback form:
/// `Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; Categories: ...; Skills: ...`
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}; Email: {}", self.name, self.phone, self.email)?;
        if !self.categories.is_empty() {
            write!(f, "; Categories: {}", join(self.categories.iter()))?;
        }
        if !self.skills.is_empty() {
            write!(f, "; Skills: {}", join(self.skills.iter().map(Skill::as_str)))?;
        }
        Ok(())
    }
}
