//! Error type for `motley-store-flat`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read source file: {0}")]
  Io(#[from] std::io::Error),

  /// A previous holder of the record lock panicked.
  #[error("store lock poisoned")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
