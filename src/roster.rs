//! The in-memory roster.
//!
//! Owns every person, the filter that produces the displayed view, and the
//! transient pending-deletion marker used by `delete`/`confirm`/`cancel`.

use crate::domain::Index;
use crate::error::{CommandError, CommandResult};
use crate::matching::{PersonFilter, PersonPredicate};
use crate::models::Person;
use tracing::debug;

/// State of the two-step delete interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeletionState {
    #[default]
    Idle,
    Pending(Person),
}

/// Ordered collection of unique persons plus the current filtered view.
///
/// Uniqueness is by weak identity ([`Person::is_same_person`]). The view is
/// recomputed from the filter on every read, so it always reflects the
/// latest mutation.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    persons: Vec<Person>,
    filter: PersonFilter,
    deletion: DeletionState,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from loaded persons, rejecting duplicates.
    pub fn from_persons(persons: Vec<Person>) -> CommandResult<Self> {
        let mut roster = Self::new();
        for person in persons {
            roster.add(person)?;
        }
        Ok(roster)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// True if an equal or weakly identical person is present.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons
            .iter()
            .any(|p| p == person || p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> CommandResult<()> {
        if self.has_person(&person) {
            return Err(CommandError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` (matched by full equality) with `edited`, keeping its
    /// position.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> CommandResult<()> {
        let slot = self
            .persons
            .iter_mut()
            .find(|p| *p == target)
            .ok_or(CommandError::InvalidIndex)?;
        *slot = edited;
        Ok(())
    }

    /// Remove the person equal to `target`, if present.
    pub fn remove(&mut self, target: &Person) -> Option<Person> {
        let position = self.persons.iter().position(|p| p == target)?;
        Some(self.persons.remove(position))
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: PersonFilter) {
        debug!(filter = %filter, "Updating filtered view");
        self.filter = filter;
    }

    pub fn show_all(&mut self) {
        self.set_filter(PersonFilter::ShowAll);
    }

    /// The persons currently displayed, in roster order.
    pub fn filtered(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.persons.iter().filter(|p| self.filter.matches(p)).count()
    }

    /// The person at a display index of the filtered view.
    pub fn person_at(&self, index: Index) -> CommandResult<&Person> {
        self.persons
            .iter()
            .filter(|p| self.filter.matches(p))
            .nth(index.zero_based())
            .ok_or(CommandError::InvalidIndex)
    }

    pub fn deletion(&self) -> &DeletionState {
        &self.deletion
    }

    /// Mark `person` as pending deletion. A previous pending target is
    /// overwritten and returned.
    pub fn mark_for_deletion(&mut self, person: Person) -> Option<Person> {
        match std::mem::replace(&mut self.deletion, DeletionState::Pending(person)) {
            DeletionState::Pending(previous) => Some(previous),
            DeletionState::Idle => None,
        }
    }

    /// Clear the marker, returning the person that was pending.
    pub fn take_pending(&mut self) -> Option<Person> {
        match std::mem::take(&mut self.deletion) {
            DeletionState::Pending(person) => Some(person),
            DeletionState::Idle => None,
        }
    }
}
