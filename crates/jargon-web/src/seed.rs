//! Glossary terms inserted at startup.

use jargon_core::{
  Entry, Tag,
  store::{AddOutcome, GlossaryStore},
};

/// The built-in terms.
pub fn default_entries() -> Vec<Entry> {
  vec![
    Entry::new(
      "flavour-tagging",
      "Flavour Tagging",
      "The practice of obtaining the type of particle from which a jet \
       originated",
      [Tag::Experimental],
    ),
    Entry::new(
      "blinding",
      "Data Blinding",
      "The practice of not including actual physics data when constructing \
       an analysis. This is to avoid biasing the analyst.",
      [Tag::Stats, Tag::Experimental],
    ),
  ]
}

/// Insert every default entry, returning how many were new.
pub async fn seed<S: GlossaryStore>(store: &S) -> Result<usize, S::Error> {
  let mut inserted = 0;
  for entry in default_entries() {
    if store.add_entry(&entry).await? == AddOutcome::Inserted {
      inserted += 1;
    }
  }
  tracing::info!(inserted, "seeded default entries");
  Ok(inserted)
}
