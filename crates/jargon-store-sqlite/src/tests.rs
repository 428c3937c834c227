//! Integration tests for `SqliteStore` against an in-memory database.

use jargon_core::{
  Entry, Error as CoreError, Tag,
  hash::label_id,
  store::{AddOutcome, GlossaryStore},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn flavour_tagging() -> Entry {
  Entry::new(
    "flavour-tagging",
    "Flavour Tagging",
    "The practice of obtaining the type of particle from which a jet originated",
    [Tag::Experimental],
  )
}

fn blinding() -> Entry {
  Entry::new(
    "blinding",
    "Data Blinding",
    "The practice of not including actual physics data when constructing an \
     analysis. This is to avoid biasing the analyst.",
    [Tag::Stats, Tag::Experimental],
  )
}

async fn count(s: &SqliteStore, sql: &'static str) -> i64 {
  s.conn
    .call(move |conn| Ok(conn.query_row(sql, [], |r| r.get::<_, i64>(0))?))
    .await
    .unwrap()
}

async fn exec(s: &SqliteStore, sql: impl Into<String>) {
  let sql = sql.into();
  s.conn
    .call(move |conn| {
      conn.execute_batch(&sql)?;
      Ok(())
    })
    .await
    .unwrap();
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tag_table_holds_registry() {
  let s = store().await;
  let tags = s.list_tags().await.unwrap();
  assert_eq!(
    tags,
    vec![Tag::Cern, Tag::Experimental, Tag::Theory, Tag::Stats]
  );
}

#[tokio::test]
async fn init_schema_is_idempotent() {
  let s = store().await;
  s.add_entry(&blinding()).await.unwrap();

  for _ in 0..3 {
    s.init_schema().await.unwrap();
  }

  assert_eq!(count(&s, "SELECT COUNT(*) FROM tag").await, 4);
  assert_eq!(s.list_tags().await.unwrap().len(), 4);
  assert_eq!(s.list_entries().await.unwrap().len(), 1);
}

#[tokio::test]
async fn init_schema_repairs_tag_labels() {
  let s = store().await;
  exec(&s, "UPDATE tag SET label = 'cern' WHERE id = 0").await;
  assert!(matches!(
    s.list_tags().await,
    Err(Error::TagLabelMismatch { code: 0, .. })
  ));

  s.init_schema().await.unwrap();
  assert_eq!(s.list_tags().await.unwrap()[0], Tag::Cern);
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_entry() {
  let s = store().await;
  let e = blinding();

  let outcome = s.add_entry(&e).await.unwrap();
  assert_eq!(outcome, AddOutcome::Inserted);

  let fetched = s.get_entry(e.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, e.id);
  assert_eq!(fetched.label, e.label);
  assert_eq!(fetched.title, e.title);
  assert_eq!(fetched.description, e.description);
  assert!(fetched.tags.is_empty());
}

#[tokio::test]
async fn get_entry_missing_returns_none() {
  let s = store().await;
  let result = s.get_entry(label_id("never-inserted")).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_add_is_a_noop() {
  let s = store().await;
  let e = blinding();

  assert_eq!(s.add_entry(&e).await.unwrap(), AddOutcome::Inserted);
  assert_eq!(s.add_entry(&e).await.unwrap(), AddOutcome::AlreadyExists);

  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry").await, 1);
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 2);
}

#[tokio::test]
async fn duplicate_add_keeps_original_row_and_tags() {
  let s = store().await;
  let original = blinding();
  s.add_entry(&original).await.unwrap();

  let mut changed = blinding();
  changed.title = "Something Else".into();
  changed.tags = [Tag::Theory].into();
  assert_eq!(s.add_entry(&changed).await.unwrap(), AddOutcome::AlreadyExists);

  let fetched = s.get_entry(original.id).await.unwrap().unwrap();
  assert_eq!(fetched.title, "Data Blinding");
  assert_eq!(
    s.entry_tags(original.id).await.unwrap(),
    vec![Tag::Experimental, Tag::Stats]
  );
}

#[tokio::test]
async fn entry_without_tags() {
  let s = store().await;
  let e = Entry::new("unfolding", "Unfolding", "Correcting for detector effects.", []);
  s.add_entry(&e).await.unwrap();

  assert!(s.entry_tags(e.id).await.unwrap().is_empty());
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 0);
}

#[tokio::test]
async fn colliding_label_is_rejected() {
  let s = store().await;
  let e = blinding();
  // Simulate a 32-bit collision: a different label already owns the id.
  exec(
    &s,
    format!(
      "INSERT INTO entry (id, label, title, description) \
       VALUES ({}, 'impostor', 'Impostor', '')",
      e.id
    ),
  )
  .await;

  let err = s.add_entry(&e).await.unwrap_err();
  match err {
    Error::Core(CoreError::LabelCollision { id, existing, incoming }) => {
      assert_eq!(id, e.id);
      assert_eq!(existing, "impostor");
      assert_eq!(incoming, "blinding");
    }
    other => panic!("unexpected error: {other}"),
  }
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 0);
}

#[tokio::test]
async fn entry_with_wrong_id_is_rejected() {
  let s = store().await;
  let mut bad = blinding();
  bad.id = 42;

  let err = s.add_entry(&bad).await.unwrap_err();
  match err {
    Error::Core(CoreError::Integrity { label, stored, computed }) => {
      assert_eq!(label, "blinding");
      assert_eq!(stored, 42);
      assert_eq!(computed, label_id("blinding"));
    }
    other => panic!("unexpected error: {other}"),
  }

  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry").await, 0);
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 0);
  assert!(s.list_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_tag_insert_rolls_back_entry() {
  let s = store().await;
  // Without the tag row the foreign key on entry_tag.tag_id fails.
  exec(&s, "DELETE FROM tag WHERE id = 3").await;

  let result = s.add_entry(&blinding()).await;
  assert!(matches!(result, Err(Error::Database(_))));
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry").await, 0);
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 0);
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_entries_returns_all() {
  let s = store().await;
  s.add_entry(&flavour_tagging()).await.unwrap();
  s.add_entry(&blinding()).await.unwrap();

  let entries = s.list_entries().await.unwrap();
  assert_eq!(entries.len(), 2);

  let mut titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
  titles.sort_unstable();
  assert_eq!(titles, ["Data Blinding", "Flavour Tagging"]);
  assert!(entries.iter().all(|e| e.tags.is_empty() && e.verify_id()));
}

#[tokio::test]
async fn list_entries_empty_store() {
  let s = store().await;
  assert!(s.list_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn entry_tags_are_decoded() {
  let s = store().await;
  let e = blinding();
  s.add_entry(&e).await.unwrap();

  let tags = s.entry_tags(e.id).await.unwrap();
  assert_eq!(tags, vec![Tag::Experimental, Tag::Stats]);
  assert!(s.entry_tags(label_id("missing")).await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupted_id_is_an_integrity_error() {
  let s = store().await;
  s.add_entry(&flavour_tagging()).await.unwrap();
  exec(
    &s,
    "INSERT INTO entry (id, label, title, description) \
     VALUES (42, 'blinding', 'Data Blinding', '')",
  )
  .await;

  let err = s.list_entries().await.unwrap_err();
  match err {
    Error::Core(CoreError::Integrity { label, stored, computed }) => {
      assert_eq!(label, "blinding");
      assert_eq!(stored, 42);
      assert_eq!(computed, label_id("blinding"));
    }
    other => panic!("unexpected error: {other}"),
  }

  assert!(matches!(
    s.get_entry(42).await,
    Err(Error::Core(CoreError::Integrity { stored: 42, .. }))
  ));
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

// Calls are serialised on the connection thread, so this only checks that
// concurrent callers never observe half an insert; transaction rollback is
// covered by `failed_tag_insert_rolls_back_entry`.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_are_never_partially_visible() {
  let s = store().await;

  let handles: Vec<_> = (0..16)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move {
        let e = Entry::new(
          format!("term-{i}"),
          format!("Term {i}"),
          "",
          [Tag::Theory, Tag::Stats],
        );
        s.add_entry(&e).await.unwrap();
      })
    })
    .collect();

  let reader = {
    let s = s.clone();
    tokio::spawn(async move {
      for _ in 0..16 {
        for e in s.list_entries().await.unwrap() {
          assert_eq!(s.entry_tags(e.id).await.unwrap().len(), 2);
        }
        tokio::task::yield_now().await;
      }
    })
  };

  for h in handles {
    h.await.unwrap();
  }
  reader.await.unwrap();

  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry").await, 16);
  assert_eq!(count(&s, "SELECT COUNT(*) FROM entry_tag").await, 32);
}
