//! Creation-request validation.
//!
//! A single pass over the request; the first failing rule wins and callers
//! only learn valid/invalid, never which rule failed.

use std::sync::LazyLock;

use regex::Regex;

use crate::{index::PersonIndex, person::NewPerson};

/// Nickname length cap, in characters.
pub const MAX_NICKNAME_CHARS: usize = 32;

/// Name length cap, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Day-of-month caps indexed by `month - 1`, with every year treated as a
/// leap year. February 29 always passes; true calendar validity is not part
/// of the contract.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern compiles")
});

/// Validate a creation request against the structural and semantic rules.
///
/// The nickname lookup in `index` is a fast, racy pre-check that can only
/// produce false negatives; the store's unique constraint stays
/// authoritative.
pub fn validate(request: &NewPerson, index: &PersonIndex) -> bool {
  birthdate_is_valid(&request.birthdate)
    && !request.nickname.trim().is_empty()
    && !request.name.trim().is_empty()
    && request.nickname.chars().count() <= MAX_NICKNAME_CHARS
    && request.name.chars().count() <= MAX_NAME_CHARS
    && stack_is_valid(request.stack.as_deref())
    && !index.contains_nickname(&request.nickname)
}

fn birthdate_is_valid(birthdate: &str) -> bool {
  let Some(captures) = DATE_PATTERN.captures(birthdate) else {
    return false;
  };

  let month: usize = captures[2].parse().unwrap_or(0);
  if !(1..=12).contains(&month) {
    return false;
  }

  let day: u32 = captures[3].parse().unwrap_or(0);
  (1..=MAX_DAYS[month - 1]).contains(&day)
}

fn stack_is_valid(stack: Option<&[String]>) -> bool {
  stack.is_none_or(|entries| entries.iter().all(|entry| !entry.trim().is_empty()))
}
