use staff_directory::error::{StorageError, StorageResult};
use staff_directory::{Person, RosterStorage};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock roster storage for testing.
///
/// Keeps the saved roster in memory, can be told to fail loads or saves,
/// and counts calls. Clones share state, so a test can keep a handle after
/// boxing one into the service.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRosterStorage {
    path: PathBuf,
    stored: Arc<Mutex<Option<Vec<Person>>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRosterStorage {
    /// Create storage with nothing saved yet.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("mock/roster.json"),
            stored: Arc::new(Mutex::new(None)),
            fail_load: Arc::new(Mutex::new(false)),
            fail_save: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create storage that already holds `persons`.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        let storage = Self::new();
        *storage.stored.lock().unwrap() = Some(persons);
        storage
    }

    pub fn set_fail_load(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    /// The roster as last saved.
    pub fn stored(&self) -> Option<Vec<Person>> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockRosterStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStorage for MockRosterStorage {
    fn load(&self) -> StorageResult<Option<Vec<Person>>> {
        self.track_call("load");
        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::InvalidData("mock load failure".to_string()));
        }
        Ok(self.stored())
    }

    fn save(&self, persons: &[Person]) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }
        *self.stored.lock().unwrap() = Some(persons.to_vec());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
