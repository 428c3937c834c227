//! Entry — one glossary term.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, hash::label_id, tag::Tag};

/// A glossary term. `id` is always the hash of `label`; build entries with
/// [`Entry::new`] rather than setting it by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  pub id:          u32,
  pub label:       String,
  pub title:       String,
  pub description: String,
  /// Empty on entries read back by list and point lookups; the association
  /// rows are fetched separately.
  #[serde(default)]
  pub tags:        BTreeSet<Tag>,
}

impl Entry {
  pub fn new(
    label: impl Into<String>,
    title: impl Into<String>,
    description: impl Into<String>,
    tags: impl IntoIterator<Item = Tag>,
  ) -> Self {
    let label = label.into();
    Self {
      id: label_id(&label),
      label,
      title: title.into(),
      description: description.into(),
      tags: tags.into_iter().collect(),
    }
  }

  /// Whether `id` still matches the hash of `label`.
  pub fn verify_id(&self) -> bool { self.id == label_id(&self.label) }

  /// Like [`Entry::verify_id`], reporting a mismatch as
  /// [`Error::Integrity`].
  pub fn check_id(&self) -> Result<()> {
    if self.verify_id() {
      return Ok(());
    }
    Err(Error::Integrity {
      label:    self.label.clone(),
      stored:   self.id,
      computed: label_id(&self.label),
    })
  }
}
