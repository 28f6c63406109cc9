//! Tests for `FlatFileStore`, mostly over in-memory record text.

use motley_core::{person::NewPerson, store::PersonStore};

use crate::FlatFileStore;

fn candidate(color_id: i64) -> NewPerson {
  NewPerson {
    name:      "Max".into(),
    last_name: "Mustermann".into(),
    zip_code:  "10115".into(),
    city:      "Berlin".into(),
    color_id,
  }
}

// ─── Construction ────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_missing_file_yields_empty_store() {
  let dir = tempfile::tempdir().expect("tempdir");
  let store = FlatFileStore::open(dir.path().join("does-not-exist.csv"))
    .expect("missing file is not an error");
  assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn open_reads_records_from_disk() {
  let dir = tempfile::tempdir().expect("tempdir");
  let path = dir.path().join("persons.csv");
  std::fs::write(&path, "Mustermann, Max, 10115 Berlin, 1\n").unwrap();

  let store = FlatFileStore::open(&path).unwrap();
  let all = store.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].last_name, "Mustermann");
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_by_id_missing_returns_none() {
  let store = FlatFileStore::from_source("");
  assert!(store.get_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn get_by_color_matches_list_all_subset() {
  let store = FlatFileStore::from_source(
    "A, B, 11111 X, 1\nC, D, 22222 Y, 2\nE, F, 33333 Z, 1\n",
  );

  let all = store.list_all().await.unwrap();
  let blue = store.get_by_color(1).await.unwrap();

  let expected: Vec<_> =
    all.into_iter().filter(|p| p.color_id == 1).collect();
  assert_eq!(blue, expected);
  assert_eq!(blue.len(), 2);
}

#[tokio::test]
async fn get_by_color_invalid_code_is_empty() {
  let store = FlatFileStore::from_source("A, B, 11111 X, 1\n");
  assert!(store.get_by_color(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_is_idempotent() {
  let store = FlatFileStore::from_source(
    "A, B, 11111 X, 1\nC, D, 22222 Y, 2\n",
  );
  let first = store.list_all().await.unwrap();
  let second = store.list_all().await.unwrap();
  assert_eq!(first, second);
}

// ─── Add ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_to_empty_store_starts_at_one() {
  let store = FlatFileStore::from_source("");
  let person = store.add(candidate(3)).await.unwrap();
  assert_eq!(person.id, 1);
}

#[tokio::test]
async fn add_assigns_one_greater_than_max() {
  let store = FlatFileStore::from_source(
    "A, B, 11111 X, 1\nC, D, 22222 Y, 2\n",
  );
  let person = store.add(candidate(3)).await.unwrap();
  assert_eq!(person.id, 3);
}

#[tokio::test]
async fn add_then_get_by_id_round_trips() {
  let store = FlatFileStore::from_source("");
  let input = candidate(5);
  let added = store.add(input.clone()).await.unwrap();

  let fetched = store
    .get_by_id(added.id)
    .await
    .unwrap()
    .expect("record was just added");
  assert_eq!(fetched.clone().into_candidate(), input);
  assert_eq!(fetched, added);
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_source_records_never_surface() {
  let store = FlatFileStore::from_source(
    "Hans, Meyer, 80331 München, 2\n\
     \n\
     Bad, Row, 99999 X, notanumber\n\
     Gruen, Klaus, 10115 Berlin, 2\n",
  );

  let all = store.list_all().await.unwrap();
  assert_eq!(all.len(), 2);
  assert_eq!(all[0].id, 1);
  assert_eq!(all[1].id, 2);
  assert!(all.iter().all(|p| p.color_id == 2));
  assert!(all.iter().all(|p| p.last_name != "Bad"));

  let green = store.get_by_color(2).await.unwrap();
  assert_eq!(green, all);
  assert!(store.get_by_color(4).await.unwrap().is_empty());
}
