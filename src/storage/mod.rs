//! Persistence of the roster.
//!
//! The roster is stored as one JSON document. [`RosterStorage`] is the seam
//! the dispatcher depends on; [`JsonRosterStorage`] is the file-backed
//! implementation.

mod io;
mod json_adapted;
mod json_storage;
mod traits;

pub use io::atomic_write;
pub use json_adapted::{JsonAdaptedCategory, JsonAdaptedPerson, JsonAdaptedSkill, JsonRosterDocument};
pub use json_storage::JsonRosterStorage;
pub use traits::RosterStorage;
