//! Person filter predicates.
//!
//! All matching is case-insensitive. Two strategies exist:
//! - [`SkillOrCategoryExact`]: legacy single-dimension filter, a keyword
//!   must equal a skill or a category value exactly
//! - [`ListFilters`]: two-dimension filter, substring matching, OR within a
//!   dimension and AND across dimensions
//!
//! Substring vs exact is fixed per strategy and never mixed inside one.

use crate::domain::{Category, CategoryKind};
use crate::models::Person;
use std::fmt;

/// Anything that can decide whether a person belongs in the filtered view.
pub trait PersonPredicate {
    fn matches(&self, person: &Person) -> bool;
}

fn lower_all(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn contains_any(haystack_lower: &str, needles_lower: &[String]) -> bool {
    needles_lower.iter().any(|n| haystack_lower.contains(n.as_str()))
}

/// Matches persons whose full name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: lower_all(keywords),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl PersonPredicate for NameContainsKeywords {
    fn matches(&self, person: &Person) -> bool {
        self.keywords
            .iter()
            .any(|k| person.name().contains_ignore_case(k))
    }
}

/// Matches persons with a skill, or a category value, equal to one of the
/// keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOrCategoryExact {
    keywords: Vec<String>,
}

impl SkillOrCategoryExact {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: lower_all(keywords),
        }
    }
}

impl PersonPredicate for SkillOrCategoryExact {
    fn matches(&self, person: &Person) -> bool {
        let skill_hit = person
            .skills()
            .iter()
            .any(|s| self.keywords.contains(&s.normalized()));
        let category_hit = person
            .categories()
            .iter()
            .any(|c| self.keywords.contains(&c.value().to_lowercase()));
        skill_hit || category_hit
    }
}

/// The `list s/... c/...` filter.
///
/// A person matches iff
/// (no skill keywords OR some skill contains some skill keyword) AND
/// (no category keywords OR some category's `Name: Value` text contains
/// some category keyword).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    skills: Vec<String>,
    categories: Vec<String>,
}

impl ListFilters {
    pub fn new(skill_keywords: &[String], category_keywords: &[String]) -> Self {
        Self {
            skills: lower_all(skill_keywords),
            categories: lower_all(category_keywords),
        }
    }

    pub fn skill_keywords(&self) -> &[String] {
        &self.skills
    }

    pub fn category_keywords(&self) -> &[String] {
        &self.categories
    }

    /// True when neither dimension constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.skills.is_empty() && self.categories.is_empty()
    }

    fn category_text(category: &Category) -> String {
        category.to_string().to_lowercase()
    }
}

impl PersonPredicate for ListFilters {
    fn matches(&self, person: &Person) -> bool {
        let skill_ok = self.skills.is_empty()
            || person
                .skills()
                .iter()
                .any(|s| contains_any(&s.normalized(), &self.skills));

        let category_ok = self.categories.is_empty()
            || person
                .categories()
                .iter()
                .any(|c| contains_any(&Self::category_text(c), &self.categories));

        skill_ok && category_ok
    }
}

/// The predicate currently applied to the roster's view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    ShowAll,
    Name(NameContainsKeywords),
    SkillOrCategory(SkillOrCategoryExact),
    List(ListFilters),
    /// Persons carrying exactly this category value on a dimension.
    CategoryValue(CategoryKind, String),
}

impl PersonPredicate for PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        match self {
            Self::ShowAll => true,
            Self::Name(p) => p.matches(person),
            Self::SkillOrCategory(p) => p.matches(person),
            Self::List(p) => p.matches(person),
            Self::CategoryValue(kind, value) => person
                .category_value(*kind)
                .is_some_and(|v| v.eq_ignore_ascii_case(value)),
        }
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowAll => write!(f, "all"),
            Self::Name(p) => write!(f, "name~{:?}", p.keywords),
            Self::SkillOrCategory(p) => write!(f, "skill|category={:?}", p.keywords),
            Self::List(p) => write!(f, "skills~{:?} categories~{:?}", p.skills, p.categories),
            Self::CategoryValue(kind, value) => write!(f, "{}={}", kind.keyword(), value),
        }
    }
}
