//! Data models for the employee directory.
//!
//! `Person` is the immutable employee record; `PersonUpdate` describes the
//! fields an edit supplies and merges them over an existing person.

pub mod person;
pub mod update;

pub use person::Person;
pub use update::{CategoryChange, PersonUpdate};
