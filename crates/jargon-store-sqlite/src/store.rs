//! [`SqliteStore`] — the SQLite implementation of [`GlossaryStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use jargon_core::{
  Entry, Tag,
  store::{AddOutcome, GlossaryStore},
};

use crate::{
  Error, Result,
  encode::{RawEntry, RawTag},
  schema::{SCHEMA, SEED_TAG},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A glossary store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

/// What the insert transaction found, before it is turned into an outcome or
/// an error.
enum InsertResult {
  Inserted,
  Duplicate,
  Collision(String),
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    tracing::info!(path = %path.as_ref().display(), "opening glossary database");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }
}

// ─── GlossaryStore impl ──────────────────────────────────────────────────────

impl GlossaryStore for SqliteStore {
  type Error = Error;

  async fn init_schema(&self) -> Result<()> {
    let registry: Vec<(u32, &'static str)> = Tag::registry().collect();

    self
      .conn
      .call(move |conn| {
        conn.execute_batch(SCHEMA)?;

        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(SEED_TAG)?;
          for (code, label) in &registry {
            stmt.execute(rusqlite::params![code, label])?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    tracing::debug!("schema initialised and tag table seeded");
    Ok(())
  }

  async fn add_entry(&self, entry: &Entry) -> Result<AddOutcome> {
    // A row whose id is not the hash of its label would poison every read.
    entry.check_id()?;

    let id          = entry.id;
    let label       = entry.label.clone();
    let title       = entry.title.clone();
    let description = entry.description.clone();
    let tag_codes: Vec<u32> = entry.tags.iter().map(|t| t.code()).collect();

    let result = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let inserted = tx.execute(
          "INSERT INTO entry (id, label, title, description)
           VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT(id) DO NOTHING",
          rusqlite::params![id, label, title, description],
        )?;

        if inserted == 0 {
          // Dropping `tx` rolls back; nothing was written anyway.
          let existing: String = tx.query_row(
            "SELECT label FROM entry WHERE id = ?1",
            rusqlite::params![id],
            |row| row.get(0),
          )?;
          return Ok(if existing == label {
            InsertResult::Duplicate
          } else {
            InsertResult::Collision(existing)
          });
        }

        {
          let mut stmt = tx.prepare(
            "INSERT INTO entry_tag (tag_id, entry_id) VALUES (?1, ?2)",
          )?;
          for code in &tag_codes {
            stmt.execute(rusqlite::params![code, id])?;
          }
        }

        tx.commit()?;
        Ok(InsertResult::Inserted)
      })
      .await?;

    match result {
      InsertResult::Inserted => {
        tracing::debug!(id, label = %entry.label, tags = entry.tags.len(), "entry added");
        Ok(AddOutcome::Inserted)
      }
      InsertResult::Duplicate => {
        tracing::debug!(id, label = %entry.label, "entry already exists");
        Ok(AddOutcome::AlreadyExists)
      }
      InsertResult::Collision(existing) => {
        tracing::warn!(id, label = %entry.label, %existing, "label hash collision");
        Err(Error::Core(jargon_core::Error::LabelCollision {
          id,
          existing,
          incoming: entry.label.clone(),
        }))
      }
    }
  }

  async fn get_entry(&self, id: u32) -> Result<Option<Entry>> {
    let raw: Option<RawEntry> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, label, title, description FROM entry WHERE id = ?1",
            rusqlite::params![id],
            RawEntry::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawEntry::into_entry).transpose()
  }

  async fn list_entries(&self) -> Result<Vec<Entry>> {
    let raws: Vec<RawEntry> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, label, title, description FROM entry")?;
        let rows = stmt
          .query_map([], RawEntry::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEntry::into_entry).collect()
  }

  async fn entry_tags(&self, id: u32) -> Result<Vec<Tag>> {
    let codes: Vec<u32> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT tag_id FROM entry_tag WHERE entry_id = ?1 ORDER BY tag_id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![id], |row| row.get::<_, u32>(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(
      codes
        .into_iter()
        .map(Tag::from_code)
        .collect::<jargon_core::Result<_>>()?,
    )
  }

  async fn list_tags(&self) -> Result<Vec<Tag>> {
    let raws: Vec<RawTag> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, label FROM tag ORDER BY id")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawTag {
              id:    row.get(0)?,
              label: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTag::into_tag).collect()
  }
}
