//! Conversions between SQLite rows and domain types.
//!
//! Timestamps are stored as RFC 3339 strings. Column order in every
//! `SELECT`/`RETURNING` list must match the `*_COLUMNS` constants below.

use chrono::{DateTime, Utc};
use placement_core::{
  employer::{Employer, EmployerSummary},
  mood::{Mood, StudentId},
};

use crate::{Error, Result};

pub const EMPLOYER_COLUMNS: &str =
  "id, name, contact_number, address_line1, address_line2, address_line3, addr_long, addr_lat";

pub const MOOD_COLUMNS: &str = "id, student_id, recorded_at, emotion, is_daily";

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Employer ─────────────────────────────────────────────────────────────────

pub fn employer_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employer> {
  Ok(Employer {
    id:             row.get(0)?,
    name:           row.get(1)?,
    contact_number: row.get(2)?,
    address_line_1: row.get(3)?,
    address_line_2: row.get(4)?,
    address_line_3: row.get(5)?,
    longitude:      row.get(6)?,
    latitude:       row.get(7)?,
  })
}

pub fn summary_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<EmployerSummary> {
  Ok(EmployerSummary {
    id:   row.get(0)?,
    name: row.get(1)?,
  })
}

// ─── Mood ─────────────────────────────────────────────────────────────────────

/// A mood row with its timestamp still in text form.
#[derive(Debug)]
pub struct RawMood {
  pub id:          i64,
  pub student_id:  i64,
  pub recorded_at: String,
  pub emotion:     String,
  pub is_daily:    bool,
}

impl RawMood {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      student_id:  row.get(1)?,
      recorded_at: row.get(2)?,
      emotion:     row.get(3)?,
      is_daily:    row.get(4)?,
    })
  }

  pub fn into_mood(self) -> Result<Mood> {
    Ok(Mood {
      id:          self.id,
      student_id:  StudentId(self.student_id),
      recorded_at: decode_dt(&self.recorded_at)?,
      emotion:     self.emotion,
      is_daily:    self.is_daily,
    })
  }
}
