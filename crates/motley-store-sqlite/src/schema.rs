//! SQL schema for the SQLite person store.
//!
//! Executed once at connection startup, gated on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Persons are insert-only. No UPDATE or DELETE is ever issued against this
-- table; ids come from the INTEGER PRIMARY KEY (the rowid).
CREATE TABLE IF NOT EXISTS persons (
    person_id  INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    zip_code   TEXT NOT NULL,   -- TEXT keeps leading zeros
    city       TEXT NOT NULL,
    color_id   INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS persons_color_idx ON persons(color_id);

PRAGMA user_version = 1;
";
