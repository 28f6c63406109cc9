//! The `PersonStore` trait — the capability contract every backend
//! satisfies.
//!
//! The trait is implemented by storage backends (`motley-store-flat`,
//! `motley-store-sqlite`). Higher layers (`motley-api`, `motley-server`)
//! depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{NewPerson, Person};

/// Abstraction over a person registry backend.
///
/// Both backends answer read misses the same way: `None` for an unknown id,
/// an empty `Vec` for a color that matches nothing — never an error. `add`
/// assigns a fresh unique id (ignoring any id on the candidate) and id
/// assignment is atomic within a single backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every record currently held. The flat backend preserves insertion
  /// order; no ordering is promised beyond what a backend naturally
  /// provides.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// All records whose `color_id` equals the argument. A code outside the
  /// catalog simply matches nothing.
  fn get_by_color(
    &self,
    color_id: i64,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Persist `candidate` under a fresh id and return the stored record.
  fn add(
    &self,
    candidate: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;
}
