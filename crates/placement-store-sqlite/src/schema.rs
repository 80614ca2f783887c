//! SQL schema for the placement SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout version; there are no migrations yet.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps deleted ids from ever being handed out again.
CREATE TABLE IF NOT EXISTS employer (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    contact_number  TEXT NOT NULL,
    address_line1   TEXT NOT NULL,
    address_line2   TEXT NOT NULL,
    address_line3   TEXT NOT NULL,
    addr_long       REAL NOT NULL,
    addr_lat        REAL NOT NULL
);

-- Mood entries are append-only.
CREATE TABLE IF NOT EXISTS mood (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id   INTEGER NOT NULL,
    recorded_at  TEXT NOT NULL,      -- ISO 8601 UTC; server-assigned
    emotion      TEXT NOT NULL,
    is_daily     INTEGER NOT NULL    -- 0 | 1
);

CREATE INDEX IF NOT EXISTS mood_student_idx ON mood(student_id);

PRAGMA user_version = 1;
";
