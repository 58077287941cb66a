//! Handlers for the person endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/persons` | Body: `{nickname, name, birthdate, stack?}`; 201 + Location |
//! | `GET`  | `/persons/:id` | 404 if not found |
//! | `GET`  | `/persons?t=term` | 400 on blank/missing term |
//! | `GET`  | `/persons-count` | Bare integer |

use axum::{
  Json,
  extract::{Path, Query, State, rejection::JsonRejection},
  http::{StatusCode, header},
  response::IntoResponse,
};
use roster_core::{
  person::{NewPerson, Person},
  store::{InsertOutcome, PersonStore},
  validate::validate,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /persons`
///
/// Bodies that fail to deserialise (missing field, wrong type, bad JSON) get
/// the same 422 as semantically invalid ones.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let Ok(Json(request)) = body else {
    return Err(ApiError::Unprocessable);
  };

  if !validate(&request, &state.index) {
    return Err(ApiError::Unprocessable);
  }

  let person = request.into_person(Uuid::new_v4());

  match state
    .store
    .insert(person.clone())
    .await
    .map_err(ApiError::store)?
  {
    InsertOutcome::AlreadyExists => Err(ApiError::Unprocessable),
    InsertOutcome::Inserted => {
      let location = format!("/persons/{}", person.id);
      state.index.add_nickname(&person.nickname);
      state.index.put(person);
      Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
    }
  }
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /persons/:id`
///
/// Served from the index when possible; a store round-trip happens only on a
/// cache miss, and its result is backfilled. An id that does not parse as a
/// UUID is indistinguishable from an unknown one.
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;

  if let Some(person) = state.index.get(id) {
    return Ok(Json(person));
  }

  let person = state
    .store
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound)?;

  state.index.add_nickname(&person.nickname);
  state.index.put(person.clone());
  Ok(Json(person))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  pub t: Option<String>,
}

/// `GET /persons?t=<term>`
///
/// No matches is an empty 200 array, not a 404.
pub async fn search<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let term = params.t.as_deref().unwrap_or("");
  if term.trim().is_empty() {
    return Err(ApiError::BadRequest);
  }

  let persons = state.store.search(term).await.map_err(ApiError::store)?;
  Ok(Json(persons))
}

// ─── Count ────────────────────────────────────────────────────────────────────

/// `GET /persons-count`
pub async fn count<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<u64>, ApiError>
where
  S: PersonStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let total = state.store.count().await.map_err(ApiError::store)?;
  Ok(Json(total))
}
