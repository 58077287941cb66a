//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use roster_core::{
  person::Person,
  store::{InsertOutcome, PersonStore},
};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  Error, Result,
  encode::{RawPerson, encode_stack, encode_uuid, escape_like, search_text},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path.as_ref().to_owned()).await?;
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

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Whether `e` reports a UNIQUE constraint violation, which in this schema
/// can only be the nickname column for freshly generated ids.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(err, _)
      if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, person: Person) -> Result<InsertOutcome> {
    let id_str     = encode_uuid(person.id);
    let stack_json = person.stack.as_deref().map(encode_stack).transpose()?;
    let search     = search_text(person.stack.as_deref());
    let Person { nickname, name, birthdate, .. } = person;

    let outcome = self
      .conn
      .call(move |conn| {
        let result = conn.execute(
          "INSERT INTO persons (id, nickname, name, birthdate, stack, stack_search)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, nickname, name, birthdate, stack_json, search],
        );

        match result {
          Ok(_) => Ok(InsertOutcome::Inserted),
          Err(e) if is_unique_violation(&e) => Ok(InsertOutcome::AlreadyExists),
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    Ok(outcome)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, nickname, name, birthdate, stack
               FROM persons
               WHERE id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawPerson {
                  id:        row.get(0)?,
                  nickname:  row.get(1)?,
                  name:      row.get(2)?,
                  birthdate: row.get(3)?,
                  stack:     row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn search(&self, term: &str) -> Result<Vec<Person>> {
    let pattern = format!("%{}%", escape_like(term));

    let raws: Vec<RawPerson> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, nickname, name, birthdate, stack
           FROM persons
           WHERE nickname     LIKE ?1 ESCAPE '\\'
              OR name         LIKE ?1 ESCAPE '\\'
              OR stack_search LIKE ?1 ESCAPE '\\'
           LIMIT 50",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![pattern], |row| {
            Ok(RawPerson {
              id:        row.get(0)?,
              nickname:  row.get(1)?,
              name:      row.get(2)?,
              birthdate: row.get(3)?,
              stack:     row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM persons", [], |row| row.get(0))?)
      })
      .await?;

    Ok(count as u64)
  }
}
