//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use motley_core::{
  person::{NewPerson, Person},
  store::PersonStore,
};

use crate::{Error, Result, schema::SCHEMA};

const SELECT_PERSON: &str =
  "SELECT person_id, name, last_name, zip_code, city, color_id FROM persons";

fn person_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:        row.get(0)?,
    name:      row.get(1)?,
    last_name: row.get(2)?,
    zip_code:  row.get(3)?,
    city:      row.get(4)?,
    color_id:  row.get(5)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation is one round trip against the database; `add` relies on the
/// rowid primary key instead of computing ids in process, so ordering and
/// isolation are exactly SQLite's.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<Person>> {
    let persons = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("{SELECT_PERSON} ORDER BY person_id"))?;
        let rows = stmt
          .query_map([], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(persons)
  }

  async fn get_by_id(&self, id: i64) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_PERSON} WHERE person_id = ?1"),
              rusqlite::params![id],
              person_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(person)
  }

  async fn get_by_color(&self, color_id: i64) -> Result<Vec<Person>> {
    let persons = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "{SELECT_PERSON} WHERE color_id = ?1 ORDER BY person_id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![color_id], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(persons)
  }

  async fn add(&self, candidate: NewPerson) -> Result<Person> {
    let person = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO persons (name, last_name, zip_code, city, color_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            candidate.name,
            candidate.last_name,
            candidate.zip_code,
            candidate.city,
            candidate.color_id,
          ],
        )?;
        // Insert and id read happen on the same connection inside this one
        // call, so no other writer can slip in between.
        let id = conn.last_insert_rowid();
        Ok(candidate.into_person(id))
      })
      .await?;
    Ok(person)
  }
}
