//! Partial updates applied by `edit` and `update_employee`.

use super::person::Person;
use crate::domain::{Category, CategorySet, Email, Name, Phone, SkillSet};

/// How a partial update changes a person's categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChange {
    /// Discard the existing categories and use these. An empty set clears.
    Replace(CategorySet),

    /// Keep existing categories, set the listed ones (by name) and drop the
    /// named ones.
    Patch {
        set: Vec<Category>,
        remove: Vec<String>,
    },
}

impl CategoryChange {
    fn apply(&self, existing: &CategorySet) -> CategorySet {
        match self {
            Self::Replace(categories) => categories.clone(),
            Self::Patch { set, remove } => {
                let mut categories = existing.clone();
                for name in remove {
                    categories.remove(name);
                }
                categories.extend(set.iter().cloned());
                categories
            }
        }
    }
}

/// Fields supplied to an edit. `None` means "leave unchanged".
///
/// A `Some` skill set that is empty clears the person's skills; that is how
/// a blank `s/` is represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub categories: Option<CategoryChange>,
    pub skills: Option<SkillSet>,
}

impl PersonUpdate {
    /// True if at least one field is supplied.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.categories.is_some()
            || self.skills.is_some()
    }

    /// The person that results from applying this update to `existing`.
    pub fn apply(&self, existing: &Person) -> Person {
        let categories = match &self.categories {
            Some(change) => change.apply(existing.categories()),
            None => existing.categories().clone(),
        };

        Person::new(
            self.name.clone().unwrap_or_else(|| existing.name().clone()),
            self.phone.clone().unwrap_or_else(|| existing.phone().clone()),
            self.email.clone().unwrap_or_else(|| existing.email().clone()),
            categories,
            self.skills.clone().unwrap_or_else(|| existing.skills().clone()),
        )
    }
}
