//! Unit tests for the validation engine and the in-process index.

use std::{sync::Arc, thread};

use uuid::Uuid;

use crate::{
  index::PersonIndex,
  person::{NewPerson, Person},
  validate::validate,
};

fn request(nickname: &str, name: &str, birthdate: &str) -> NewPerson {
  NewPerson {
    nickname:  nickname.to_owned(),
    name:      name.to_owned(),
    birthdate: birthdate.to_owned(),
    stack:     None,
  }
}

fn with_stack(mut req: NewPerson, stack: &[&str]) -> NewPerson {
  req.stack = Some(stack.iter().map(|s| (*s).to_owned()).collect());
  req
}

fn person(nickname: &str) -> Person {
  Person {
    id:        Uuid::new_v4(),
    nickname:  nickname.to_owned(),
    name:      "Ana Souza".to_owned(),
    birthdate: "1990-05-17".to_owned(),
    stack:     None,
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn accepts_a_well_formed_request() {
  let index = PersonIndex::new();
  let req = with_stack(request("ana", "Ana Souza", "1990-05-17"), &["rust", "postgres"]);
  assert!(validate(&req, &index));
}

#[test]
fn accepts_a_request_without_stack() {
  let index = PersonIndex::new();
  assert!(validate(&request("ana", "Ana Souza", "1990-05-17"), &index));
}

#[test]
fn rejects_dates_not_matching_the_pattern() {
  let index = PersonIndex::new();
  for bad in [
    "",
    "1990-5-17",
    "1990-05-7",
    "90-05-17",
    "1990/05/17",
    "17-05-1990",
    "1990-05-17 ",
    "1990-05-017",
    "199o-05-17",
    "not a date",
  ] {
    assert!(!validate(&request("ana", "Ana Souza", bad), &index), "{bad:?} passed");
  }
}

#[test]
fn rejects_out_of_range_months() {
  let index = PersonIndex::new();
  assert!(!validate(&request("ana", "Ana Souza", "1990-00-10"), &index));
  assert!(!validate(&request("ana", "Ana Souza", "1990-13-10"), &index));
  assert!(validate(&request("ana", "Ana Souza", "1990-12-31"), &index));
}

#[test]
fn day_limits_follow_the_leap_year_table() {
  let index = PersonIndex::new();

  // Every year counts as a leap year: February 29 always passes.
  assert!(validate(&request("ana", "Ana Souza", "2023-02-29"), &index));
  assert!(!validate(&request("ana", "Ana Souza", "2023-02-30"), &index));

  assert!(validate(&request("ana", "Ana Souza", "1990-01-31"), &index));
  assert!(!validate(&request("ana", "Ana Souza", "1990-04-31"), &index));
  assert!(validate(&request("ana", "Ana Souza", "1990-06-30"), &index));
  assert!(!validate(&request("ana", "Ana Souza", "1990-11-31"), &index));
  assert!(!validate(&request("ana", "Ana Souza", "1990-05-00"), &index));
}

#[test]
fn rejects_blank_nickname_and_name() {
  let index = PersonIndex::new();
  assert!(!validate(&request("", "Ana Souza", "1990-05-17"), &index));
  assert!(!validate(&request("   ", "Ana Souza", "1990-05-17"), &index));
  assert!(!validate(&request("ana", "", "1990-05-17"), &index));
  assert!(!validate(&request("ana", "\t", "1990-05-17"), &index));
}

#[test]
fn nickname_length_boundary_is_32() {
  let index = PersonIndex::new();
  assert!(validate(&request(&"a".repeat(32), "Ana Souza", "1990-05-17"), &index));
  assert!(!validate(&request(&"a".repeat(33), "Ana Souza", "1990-05-17"), &index));
}

#[test]
fn name_length_boundary_is_100() {
  let index = PersonIndex::new();
  assert!(validate(&request("ana", &"n".repeat(100), "1990-05-17"), &index));
  assert!(!validate(&request("ana", &"n".repeat(101), "1990-05-17"), &index));
}

#[test]
fn rejects_blank_stack_entries() {
  let index = PersonIndex::new();
  let req = with_stack(request("ana", "Ana Souza", "1990-05-17"), &["rust", " "]);
  assert!(!validate(&req, &index));

  // An empty stack list has no blank entry to object to.
  let req = with_stack(request("ana", "Ana Souza", "1990-05-17"), &[]);
  assert!(validate(&req, &index));
}

#[test]
fn rejects_nicknames_already_in_the_index() {
  let index = PersonIndex::new();
  index.add_nickname("ana");
  assert!(!validate(&request("ana", "Ana Souza", "1990-05-17"), &index));
  assert!(validate(&request("ana2", "Ana Souza", "1990-05-17"), &index));
}

// ─── Index ───────────────────────────────────────────────────────────────────

#[test]
fn put_then_get_returns_the_person() {
  let index = PersonIndex::new();
  let p = person("ana");

  index.put(p.clone());
  assert_eq!(index.get(p.id), Some(p));
}

#[test]
fn get_of_unknown_id_is_none() {
  let index = PersonIndex::new();
  assert_eq!(index.get(Uuid::new_v4()), None);
}

#[test]
fn nickname_set_membership() {
  let index = PersonIndex::new();
  assert!(!index.contains_nickname("ana"));
  index.add_nickname("ana");
  assert!(index.contains_nickname("ana"));
  assert!(!index.contains_nickname("Ana"));
}

#[test]
fn concurrent_puts_and_adds_are_all_visible() {
  let index = Arc::new(PersonIndex::new());

  let handles: Vec<_> = (0..8)
    .map(|t| {
      let index = Arc::clone(&index);
      thread::spawn(move || {
        let mut ids = Vec::new();
        for i in 0..100 {
          let p = person(&format!("dev-{t}-{i}"));
          ids.push((p.id, p.nickname.clone()));
          index.add_nickname(&p.nickname);
          index.put(p);
        }
        ids
      })
    })
    .collect();

  for handle in handles {
    for (id, nickname) in handle.join().expect("writer thread") {
      assert!(index.get(id).is_some());
      assert!(index.contains_nickname(&nickname));
    }
  }
}
