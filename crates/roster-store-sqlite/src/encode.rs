//! Encoding helpers between domain types and the plain-text representations
//! stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings. The stack is stored as
//! compact JSON next to a denormalized search text regenerated from it on
//! every insert.

use roster_core::person::Person;
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Stack ───────────────────────────────────────────────────────────────────

pub fn encode_stack(stack: &[String]) -> Result<String> {
  Ok(serde_json::to_string(stack)?)
}

pub fn decode_stack(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

/// Derived search text: stack entries lowercased and joined with single
/// spaces, so substring search scans one text column instead of an array.
/// Regenerated from the canonical stack on every insert, never edited
/// independently, never returned to clients.
pub fn search_text(stack: Option<&[String]>) -> String {
  match stack {
    Some(entries) => entries.join(" ").to_lowercase(),
    None => String::new(),
  }
}

// ─── LIKE patterns ───────────────────────────────────────────────────────────

/// Escape `LIKE` metacharacters in a search term so it matches literally,
/// then case-fold it. Stored rows are left as-is; SQLite's `LIKE` compares
/// ASCII case-insensitively.
pub fn escape_like(term: &str) -> String {
  term
    .replace('\\', "\\\\")
    .replace('%', "\\%")
    .replace('_', "\\_")
    .to_lowercase()
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub id:        String,
  pub nickname:  String,
  pub name:      String,
  pub birthdate: String,
  pub stack:     Option<String>,
}

impl RawPerson {
  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      id:        decode_uuid(&self.id)?,
      nickname:  self.nickname,
      name:      self.name,
      birthdate: self.birthdate,
      stack:     self.stack.as_deref().map(decode_stack).transpose()?,
    })
  }
}
