//! Person, the sole domain entity.
//!
//! Persons are append-only: once persisted, a person is never mutated or
//! deleted. The only writes the system ever performs are inserts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person record.
///
/// `id` is generated server-side and never client-supplied. `birthdate` is
/// kept as the validated `YYYY-MM-DD` string; nothing downstream needs a
/// calendar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:        Uuid,
  pub nickname:  String,
  pub name:      String,
  pub birthdate: String,
  pub stack:     Option<Vec<String>>,
}

/// The body of a creation request: everything but the server-assigned id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
  pub nickname:  String,
  pub name:      String,
  pub birthdate: String,
  pub stack:     Option<Vec<String>>,
}

impl NewPerson {
  /// Promote the request into a [`Person`] under a freshly assigned id.
  pub fn into_person(self, id: Uuid) -> Person {
    Person {
      id,
      nickname: self.nickname,
      name: self.name,
      birthdate: self.birthdate,
      stack: self.stack,
    }
  }
}
