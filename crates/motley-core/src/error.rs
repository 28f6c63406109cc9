//! Error types for `motley-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An insertion candidate carried a color code outside the catalog.
  /// Raised before any storage mutation is attempted.
  #[error("invalid color code: {0}")]
  InvalidColorCode(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
