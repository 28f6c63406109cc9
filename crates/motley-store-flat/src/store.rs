//! [`FlatFileStore`] — the in-memory implementation of [`PersonStore`].

use std::{io::ErrorKind, path::Path, sync::RwLock};

use motley_core::{
  person::{NewPerson, Person},
  store::PersonStore,
};

use crate::{Error, Result};

/// A person store parsed once from a flat record file and held in memory.
///
/// Reads never block on I/O after construction. `add` assigns
/// one-greater-than-the-current-maximum ids; the compute-and-push happens
/// under a single write lock so concurrent adds cannot observe the same
/// maximum.
pub struct FlatFileStore {
  persons: RwLock<Vec<Person>>,
}

impl FlatFileStore {
  /// Load the store from `path`.
  ///
  /// A missing file yields an empty store — whether that should be fatal is
  /// the caller's decision. Any other I/O failure is surfaced.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let text = match std::fs::read_to_string(path) {
      Ok(text) => text,
      Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
      Err(e) => return Err(e.into()),
    };
    Ok(Self::from_source(&text))
  }

  /// Build a store directly from record text, bypassing the filesystem.
  pub fn from_source(text: &str) -> Self {
    Self {
      persons: RwLock::new(motley_records::parse_str(text)),
    }
  }
}

impl PersonStore for FlatFileStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Person>> {
    let persons = self.persons.read().map_err(|_| Error::LockPoisoned)?;
    Ok(persons.clone())
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<Person>> {
    let persons = self.persons.read().map_err(|_| Error::LockPoisoned)?;
    Ok(persons.iter().find(|p| p.id == id).cloned())
  }

  async fn get_by_color(&self, color_id: i64) -> Result<Vec<Person>> {
    let persons = self.persons.read().map_err(|_| Error::LockPoisoned)?;
    Ok(
      persons
        .iter()
        .filter(|p| p.color_id == color_id)
        .cloned()
        .collect(),
    )
  }

  async fn add(&self, candidate: NewPerson) -> Result<Person> {
    let mut persons = self.persons.write().map_err(|_| Error::LockPoisoned)?;
    let id = persons.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let person = candidate.into_person(id);
    persons.push(person.clone());
    Ok(person)
  }
}
