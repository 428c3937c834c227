//! The tag registry — a closed set of classification labels.
//!
//! Tags are reference data: the `tag` table is seeded from [`Tag::registry`]
//! at schema initialisation and never edited afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator as _};

use crate::{Error, Result};

/// A classification tag. The discriminant is the code stored in the database.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Display,
  EnumIter,
  Serialize,
  Deserialize,
)]
pub enum Tag {
  #[serde(rename = "CERN")]
  #[strum(serialize = "CERN")]
  Cern         = 0,
  Experimental = 1,
  Theory       = 2,
  Stats        = 3,
}

impl Tag {
  /// The integer code used as `tag.id` and `entry_tag.tag_id`.
  pub fn code(self) -> u32 { self as u32 }

  /// Human-readable label stored in `tag.label`.
  pub fn label(self) -> &'static str {
    match self {
      Self::Cern => "CERN",
      Self::Experimental => "Experimental",
      Self::Theory => "Theory",
      Self::Stats => "Stats",
    }
  }

  pub fn from_code(code: u32) -> Result<Self> {
    Self::iter()
      .find(|t| t.code() == code)
      .ok_or(Error::UnknownTag(code))
  }

  /// Every `(code, label)` pair, in code order.
  pub fn registry() -> impl Iterator<Item = (u32, &'static str)> {
    Self::iter().map(|t| (t.code(), t.label()))
  }
}

/// Collect caller-supplied tags into a set, rejecting repeats.
pub fn collect_unique(tags: impl IntoIterator<Item = Tag>) -> Result<BTreeSet<Tag>> {
  let mut set = BTreeSet::new();
  for tag in tags {
    if !set.insert(tag) {
      return Err(Error::DuplicateTag(tag));
    }
  }
  Ok(set)
}
