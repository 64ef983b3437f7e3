//! Filter predicates over persons.
//!
//! This module decides which persons appear in the roster's filtered view:
//! name keywords for `find`, skill/category keywords for `list`.

pub mod filters;

pub use filters::{
    ListFilters, NameContainsKeywords, PersonFilter, PersonPredicate, SkillOrCategoryExact,
};
