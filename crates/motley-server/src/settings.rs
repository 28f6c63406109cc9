//! Runtime configuration for the server binary.

use std::path::PathBuf;

use serde::Deserialize;

/// Which backend serves the registry.
///
/// Chosen exactly once at startup; everything past the bootstrap only ever
/// sees the `PersonStore` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
  Flat,
  Sqlite,
}

/// Runtime server configuration, deserialised from `config.toml` and the
/// `MOTLEY_`-prefixed environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,

  #[serde(default = "default_port")]
  pub port: u16,

  #[serde(default = "default_backend")]
  pub backend: Backend,

  /// Source file for the flat backend; also the seed source for an empty
  /// SQLite database.
  #[serde(default = "default_records_path")]
  pub records_path: PathBuf,

  /// SQLite database file; only used with `backend = "sqlite"`.
  #[serde(default = "default_db_path")]
  pub db_path: PathBuf,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 3000 }

fn default_backend() -> Backend { Backend::Flat }

fn default_records_path() -> PathBuf { PathBuf::from("persons.csv") }

fn default_db_path() -> PathBuf { PathBuf::from("motley.db") }
