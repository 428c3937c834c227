//! Error types for `jargon-core`.

use thiserror::Error;

use crate::tag::Tag;

#[derive(Debug, Error)]
pub enum Error {
  #[error("tag {0} given more than once")]
  DuplicateTag(Tag),

  #[error("unknown tag code: {0}")]
  UnknownTag(u32),

  /// A stored id no longer matches the hash of its label. Signals corruption
  /// or a change to the hash function; such data must not be served.
  #[error("integrity violation: entry {label:?} stored as {stored}, hashes to {computed}")]
  Integrity {
    label:    String,
    stored:   u32,
    computed: u32,
  },

  /// Two distinct labels hash to the same id.
  #[error("label {incoming:?} collides with stored label {existing:?} on id {id}")]
  LabelCollision {
    id:       u32,
    existing: String,
    incoming: String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
