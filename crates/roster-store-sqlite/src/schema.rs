//! SQL schema for the roster SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Persons are append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS persons (
    id           TEXT PRIMARY KEY,
    nickname     TEXT NOT NULL UNIQUE,
    name         TEXT NOT NULL,
    birthdate    TEXT NOT NULL,   -- YYYY-MM-DD, validated upstream
    stack        TEXT,            -- JSON array of entries; NULL when absent
    stack_search TEXT NOT NULL    -- lowercased entries joined by spaces
);

PRAGMA user_version = 1;
";
