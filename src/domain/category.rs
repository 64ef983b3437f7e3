//! Category value object and the per-person category set.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

static CATEGORY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("Failed to compile category regex"));

/// The fixed classification dimensions understood by `assign`,
/// `update_employee` and `listbycategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryKind {
    Department,
    Team,
    Role,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [Self::Department, Self::Team, Self::Role];

    /// Capitalized label stored as the category name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Team => "Team",
            Self::Role => "Role",
        }
    }

    /// Lower-case keyword used on the command line (`c/team`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Team => "team",
            Self::Role => "role",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `(name, value)` classification such as `("Department", "Engineering")`.
///
/// Both parts are alphanumeric plus spaces. The name is not restricted to
/// [`CategoryKind`] here; only `assign` enforces that. Equality compares the
/// exact pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Category {
    #[serde(rename = "category")]
    name: String,
    value: String,
}

impl Category {
    /// Create a new Category, trimming both parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCategory` naming the offending part.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let value = value.into();

        if !Self::is_valid(name.trim()) {
            return Err(ValidationError::InvalidCategory(name));
        }
        if !Self::is_valid(value.trim()) {
            return Err(ValidationError::InvalidCategory(value));
        }

        Ok(Self {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        })
    }

    /// Shorthand for a category on one of the fixed dimensions.
    pub fn of_kind(kind: CategoryKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(kind.label(), value)
    }

    /// Returns true if `part` is usable as a category name or value.
    pub fn is_valid(part: &str) -> bool {
        CATEGORY_REGEX.is_match(part) && !part.trim().is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when this category sits on the given dimension.
    pub fn is_kind(&self, kind: CategoryKind) -> bool {
        self.name.eq_ignore_ascii_case(kind.label())
    }
}

// "Department: Engineering" is also the text matched by the list filters.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// A person's categories, at most one per category name.
///
/// Names are compared case-insensitively. Inserting a category whose name is
/// already present replaces the old entry, so a person never carries two
/// `Role` values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CategorySet {
    entries: BTreeMap<String, Category>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by category name. Returns the replaced entry.
    pub fn insert(&mut self, category: Category) -> Option<Category> {
        self.entries.insert(category.name.to_lowercase(), category)
    }

    /// Remove the category with the given name, if any.
    pub fn remove(&mut self, name: &str) -> Option<Category> {
        self.entries.remove(&name.trim().to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.entries.get(&name.trim().to_lowercase())
    }

    /// Value of the category on a fixed dimension.
    pub fn value_of(&self, kind: CategoryKind) -> Option<&str> {
        self.get(kind.label()).map(Category::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl Extend<Category> for CategorySet {
    fn extend<I: IntoIterator<Item = Category>>(&mut self, iter: I) {
        for category in iter {
            self.insert(category);
        }
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::collections::btree_map::Values<'a, String, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
