//! The `PersonStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::person::Person;

/// Outcome of an insert attempt.
///
/// A nickname collision detected by the backend's unique constraint is a
/// distinguished outcome rather than an error: handlers map it to their own
/// response code, while genuine backend faults propagate as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
  Inserted,
  AlreadyExists,
}

/// Abstraction over a person store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new person.
  ///
  /// A nickname already held by another row surfaces as
  /// [`InsertOutcome::AlreadyExists`]; every other backend failure as
  /// `Self::Error`.
  fn insert(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  /// Point lookup by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Case-insensitive substring search over nickname, name and stack,
  /// capped at 50 rows, in backend-default order.
  fn search<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Total number of persisted persons.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
