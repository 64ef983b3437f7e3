//! Mock implementations for testing.

pub mod mock_roster_storage;

#[allow(unused_imports)]
pub use mock_roster_storage::MockRosterStorage;
