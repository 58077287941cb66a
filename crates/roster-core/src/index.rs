//! In-process cache of persons and known nicknames.
//!
//! Non-authoritative: entries are added opportunistically on successful
//! writes and cache-miss reads, never evicted, and never invalidated short
//! of a process restart. The store remains the source of truth.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::person::Person;

/// Internally-synchronized id-to-person map plus nickname set.
///
/// Constructed once per process and shared by `Arc` into every handler; all
/// operations are safe under unbounded concurrent callers. There is no
/// ordering guarantee between a `put` and a concurrent `get` on a different
/// key.
#[derive(Debug, Default)]
pub struct PersonIndex {
  by_id:     RwLock<HashMap<Uuid, Person>>,
  nicknames: RwLock<HashSet<String>>,
}

impl PersonIndex {
  pub fn new() -> Self {
    Self::default()
  }

  /// Cached person for `id`, if any.
  pub fn get(&self, id: Uuid) -> Option<Person> {
    self.by_id.read().get(&id).cloned()
  }

  /// Cache `person` under its id.
  pub fn put(&self, person: Person) {
    self.by_id.write().insert(person.id, person);
  }

  /// Whether `nickname` is already known to be taken.
  ///
  /// Only persons this process has created or read are visible here, so
  /// false negatives are possible; false positives are not.
  pub fn contains_nickname(&self, nickname: &str) -> bool {
    self.nicknames.read().contains(nickname)
  }

  /// Record `nickname` as taken.
  pub fn add_nickname(&self, nickname: &str) {
    self.nicknames.write().insert(nickname.to_owned());
  }
}
