use crate::error::StorageResult;
use crate::models::Person;
use std::path::Path;

/// Storage for the whole roster.
///
/// Loading distinguishes "nothing stored yet" (`Ok(None)`) from a stored
/// roster, so callers can decide whether to seed sample data.
pub trait RosterStorage {
    /// Read every stored person, in stored order.
    fn load(&self) -> StorageResult<Option<Vec<Person>>>;

    /// Replace the stored roster with `persons`.
    fn save(&self, persons: &[Person]) -> StorageResult<()>;

    /// Where the roster lives, for messages.
    fn path(&self) -> &Path;
}
