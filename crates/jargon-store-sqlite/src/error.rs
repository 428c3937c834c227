//! Error type for `jargon-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] jargon_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("tag {code} is stored with label {stored:?}, registry disagrees")]
  TagLabelMismatch { code: u32, stored: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
