use super::io::atomic_write;
use super::json_adapted::{JsonAdaptedPerson, JsonRosterDocument};
use super::traits::RosterStorage;
use crate::error::{StorageError, StorageResult};
use crate::models::Person;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Roster stored as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonRosterStorage {
    path: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RosterStorage for JsonRosterStorage {
    fn load(&self) -> StorageResult<Option<Vec<Person>>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Data file not found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let document: JsonRosterDocument = serde_json::from_str(&text)?;
        let mut persons: Vec<Person> = Vec::with_capacity(document.persons.len());
        for adapted in &document.persons {
            let person = adapted.to_model()?;
            if persons.iter().any(|p| p.is_same_person(&person)) {
                return Err(StorageError::InvalidData(
                    "Persons list contains duplicate person(s).".to_string(),
                ));
            }
            persons.push(person);
        }

        info!(path = %self.path.display(), count = persons.len(), "Loaded roster");
        Ok(Some(persons))
    }

    fn save(&self, persons: &[Person]) -> StorageResult<()> {
        let document = JsonRosterDocument {
            persons: persons.iter().map(JsonAdaptedPerson::from_model).collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        atomic_write(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), count = persons.len(), "Saved roster");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
