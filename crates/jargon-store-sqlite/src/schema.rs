//! SQL schema for the Jargon SQLite store.
//!
//! Table and column names are shared with existing database files and must
//! not change. There is no migration system.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- id is the FNV-1a 32-bit hash of label.
CREATE TABLE IF NOT EXISTS entry (
    id          INTEGER PRIMARY KEY,
    label       TEXT NOT NULL,
    title       TEXT NOT NULL,
    description TEXT NOT NULL
);

-- Reference data, seeded from the tag registry.
CREATE TABLE IF NOT EXISTS tag (
    id    INTEGER PRIMARY KEY,
    label TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS entry_tag (
    tag_id   INTEGER NOT NULL REFERENCES tag(id),
    entry_id INTEGER NOT NULL REFERENCES entry(id),
    PRIMARY KEY (tag_id, entry_id)
);

CREATE INDEX IF NOT EXISTS entry_tag_entry_idx ON entry_tag(entry_id);
";

/// Upsert keyed on `tag.id`, so repeated seeding never duplicates rows.
pub const SEED_TAG: &str = "
INSERT INTO tag (id, label) VALUES (?1, ?2)
ON CONFLICT(id) DO UPDATE SET label = excluded.label
";
