//! Application service layer.
//!
//! The directory service sits between the binary's input loop and the
//! roster, storage and audit trail.

mod directory_service;

pub use directory_service::{DirectoryService, RosterSource};
