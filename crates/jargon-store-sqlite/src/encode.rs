//! Row types read from SQLite and their conversion into domain types.
//!
//! Decoding is where stored data is checked against the hash function and the
//! tag registry.

use jargon_core::{Entry, Tag};

use crate::{Error, Result};

/// Raw columns from an `entry` row.
pub struct RawEntry {
  pub id:          u32,
  pub label:       String,
  pub title:       String,
  pub description: String,
}

impl RawEntry {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      label:       row.get(1)?,
      title:       row.get(2)?,
      description: row.get(3)?,
    })
  }

  /// Check the stored id against the hash of the stored label.
  pub fn into_entry(self) -> Result<Entry> {
    let entry = Entry {
      id:          self.id,
      label:       self.label,
      title:       self.title,
      description: self.description,
      tags:        Default::default(),
    };
    entry.check_id()?;
    Ok(entry)
  }
}

/// Raw columns from a `tag` row.
pub struct RawTag {
  pub id:    u32,
  pub label: String,
}

impl RawTag {
  pub fn into_tag(self) -> Result<Tag> {
    let tag = Tag::from_code(self.id)?;
    if tag.label() != self.label {
      return Err(Error::TagLabelMismatch { code: self.id, stored: self.label });
    }
    Ok(tag)
  }
}
