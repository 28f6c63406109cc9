//! Person — one registered individual and their favorite-color code.

use serde::{Deserialize, Serialize};

/// A registered person.
///
/// Records are immutable once stored; there is no update or delete
/// operation. The id is assigned by the owning store and never accepted
/// from callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:        i64,
  pub name:      String,
  pub last_name: String,
  /// Kept as a string to preserve leading zeros.
  pub zip_code:  String,
  pub city:      String,
  pub color_id:  i64,
}

impl Person {
  /// Strip the id, e.g. to re-insert the record into a store that assigns
  /// its own identifiers.
  pub fn into_candidate(self) -> NewPerson {
    NewPerson {
      name:      self.name,
      last_name: self.last_name,
      zip_code:  self.zip_code,
      city:      self.city,
      color_id:  self.color_id,
    }
  }
}

/// Input to [`crate::store::PersonStore::add`]. Carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  pub name:      String,
  pub last_name: String,
  pub zip_code:  String,
  pub city:      String,
  pub color_id:  i64,
}

impl NewPerson {
  /// Attach a store-assigned id, producing the stored record.
  pub fn into_person(self, id: i64) -> Person {
    Person {
      id,
      name:      self.name,
      last_name: self.last_name,
      zip_code:  self.zip_code,
      city:      self.city,
      color_id:  self.color_id,
    }
  }
}
