//! [`PersonService`] — composes a [`PersonStore`] with the [`ColorCatalog`].
//!
//! The service shapes outgoing records (raw color codes become display
//! names) and validates incoming color codes before any store mutation.

use std::sync::Arc;

use motley_core::{
  color::ColorCatalog,
  person::{NewPerson, Person},
  store::PersonStore,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── External shape ──────────────────────────────────────────────────────────

/// The externally-shaped person record: the stored fields with the color
/// code resolved to its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
  pub id:        i64,
  pub name:      String,
  pub last_name: String,
  pub zip_code:  String,
  pub city:      String,
  pub color:     String,
}

// ─── Error ───────────────────────────────────────────────────────────────────

/// An error from the service.
///
/// Validation failures and backend failures are deliberately distinct
/// variants: a `Validation` error means the store was never touched.
#[derive(Debug, Error)]
pub enum ServiceError<E: std::error::Error + 'static> {
  #[error(transparent)]
  Validation(#[from] motley_core::Error),

  #[error("store error: {0}")]
  Store(#[source] E),
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Orchestrates person lookups and insertions over any backend.
pub struct PersonService<S> {
  store:  Arc<S>,
  colors: Arc<ColorCatalog>,
}

// Manual impl: `S` itself need not be `Clone` behind the `Arc`.
impl<S> Clone for PersonService<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      colors: Arc::clone(&self.colors),
    }
  }
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>, colors: Arc<ColorCatalog>) -> Self {
    Self { store, colors }
  }

  fn shape(&self, person: Person) -> PersonRecord {
    PersonRecord {
      id:        person.id,
      name:      person.name,
      last_name: person.last_name,
      zip_code:  person.zip_code,
      city:      person.city,
      color:     self.colors.name_for(person.color_id).to_owned(),
    }
  }

  /// Every record in the registry.
  pub async fn list_all(
    &self,
  ) -> Result<Vec<PersonRecord>, ServiceError<S::Error>> {
    let persons =
      self.store.list_all().await.map_err(ServiceError::Store)?;
    Ok(persons.into_iter().map(|p| self.shape(p)).collect())
  }

  /// One record by id; `None` when absent.
  pub async fn get(
    &self,
    id: i64,
  ) -> Result<Option<PersonRecord>, ServiceError<S::Error>> {
    let person =
      self.store.get_by_id(id).await.map_err(ServiceError::Store)?;
    Ok(person.map(|p| self.shape(p)))
  }

  /// All records matching a color display name.
  ///
  /// An unrecognized name is not an error — the catalog's reverse lookup
  /// is absence-returning, so the filter degrades to "no matches".
  pub async fn list_by_color_name(
    &self,
    name: &str,
  ) -> Result<Vec<PersonRecord>, ServiceError<S::Error>> {
    let Some(code) = self.colors.code_for(name) else {
      return Ok(Vec::new());
    };
    let persons = self
      .store
      .get_by_color(code)
      .await
      .map_err(ServiceError::Store)?;
    Ok(persons.into_iter().map(|p| self.shape(p)).collect())
  }

  /// Validate and insert a candidate, returning the stored record.
  ///
  /// The color code is checked against the catalog before the store is
  /// called, so an invalid code never reaches a backend.
  pub async fn create(
    &self,
    candidate: NewPerson,
  ) -> Result<PersonRecord, ServiceError<S::Error>> {
    if !self.colors.is_valid(candidate.color_id) {
      return Err(
        motley_core::Error::InvalidColorCode(candidate.color_id).into(),
      );
    }
    let person =
      self.store.add(candidate).await.map_err(ServiceError::Store)?;
    Ok(self.shape(person))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use motley_store_flat::FlatFileStore;

  use super::*;

  fn service_over(source: &str) -> PersonService<FlatFileStore> {
    PersonService::new(
      Arc::new(FlatFileStore::from_source(source)),
      Arc::new(ColorCatalog::standard()),
    )
  }

  fn candidate(color_id: i64) -> NewPerson {
    NewPerson {
      name:      "Max".into(),
      last_name: "Mustermann".into(),
      zip_code:  "10115".into(),
      city:      "Berlin".into(),
      color_id,
    }
  }

  #[tokio::test]
  async fn list_all_resolves_color_names() {
    let service = service_over("A, B, 11111 X, 1\nC, D, 22222 Y, 42\n");

    let records = service.list_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].color, "blau");
    // Out-of-catalog codes from the source render as the sentinel.
    assert_eq!(records[1].color, "unbekannt");
  }

  #[tokio::test]
  async fn get_missing_is_none() {
    let service = service_over("");
    assert!(service.get(7).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn list_by_color_name_is_case_insensitive() {
    let service = service_over("A, B, 11111 X, 1\nC, D, 22222 Y, 2\n");

    let blue = service.list_by_color_name("BLAU").await.unwrap();
    assert_eq!(blue.len(), 1);
    assert_eq!(blue[0].last_name, "A");
  }

  #[tokio::test]
  async fn list_by_unknown_color_name_is_empty() {
    let service = service_over("A, B, 11111 X, 1\n");
    assert!(service.list_by_color_name("orange").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn create_shapes_the_stored_record() {
    let service = service_over("");

    let record = service.create(candidate(4)).await.unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.color, "rot");

    let fetched = service.get(record.id).await.unwrap();
    assert_eq!(fetched, Some(record));
  }

  #[tokio::test]
  async fn create_with_invalid_color_fails_before_storage() {
    let service = service_over("A, B, 11111 X, 1\n");

    let err = service.create(candidate(8)).await.unwrap_err();
    assert!(matches!(
      err,
      ServiceError::Validation(motley_core::Error::InvalidColorCode(8))
    ));

    // Nothing was written.
    assert_eq!(service.list_all().await.unwrap().len(), 1);
  }
}
