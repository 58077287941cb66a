//! JSON REST API for roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::PersonStore`],
//! plus the `server` binary that wires configuration, tracing and the SQLite
//! store together.

pub mod error;
pub mod persons;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use roster_core::{index::PersonIndex, store::PersonStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;


// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `ROSTER_*` environment. Every field has a default so the binary runs with
/// no configuration present.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 9999 }

fn default_store_path() -> PathBuf { PathBuf::from("roster.db") }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
///
/// The index is constructed once per process and duplicates a subset of
/// store contents on a best-effort basis; handlers treat the store as the
/// source of truth.
#[derive(Clone)]
pub struct AppState<S: PersonStore> {
  pub store: Arc<S>,
  pub index: Arc<PersonIndex>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] serving the person endpoints.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PersonStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/persons", get(persons::search::<S>).post(persons::create::<S>))
    .route("/persons/{id}", get(persons::get_one::<S>))
    .route("/persons-count", get(persons::count::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
