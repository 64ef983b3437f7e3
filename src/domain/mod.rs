//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of an employee
//! record. Each value object trims and validates its input at construction
//! time, so invalid data cannot be represented in the roster.

pub mod category;
pub mod email;
pub mod errors;
pub mod index;
pub mod name;
pub mod phone;
pub mod skill;

pub use category::{Category, CategoryKind, CategorySet};
pub use email::Email;
pub use errors::ValidationError;
pub use index::Index;
pub use name::Name;
pub use phone::Phone;
pub use skill::{Skill, SkillSet};
