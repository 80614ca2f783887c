//! Mood entries: timestamped emotional-state records scoped to a student.
//!
//! Entries are append-only. There is no update or delete.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Identifies the student a mood entry belongs to.
///
/// The value is trusted as supplied by the caller; nothing here checks it
/// against a registry of students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i64);

impl FromStr for StudentId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse()
      .map(StudentId)
      .map_err(|_| Error::InvalidStudentId(s.to_owned()))
  }
}

impl fmt::Display for StudentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// A persisted mood entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
  pub id:          i64,
  pub student_id:  StudentId,
  /// Server-assigned when the entry was created.
  pub recorded_at: DateTime<Utc>,
  /// Free text; no fixed vocabulary.
  pub emotion:     String,
  /// `true` for the daily reflection, `false` for an ad hoc entry.
  pub is_daily:    bool,
}

/// The caller-supplied part of a new mood entry.
///
/// Any `student_id` or `recorded_at` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoodInput {
  pub emotion:  String,
  pub is_daily: bool,
}

/// A mood entry ready to be inserted; only the id is left to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMood {
  pub student_id:  StudentId,
  pub recorded_at: DateTime<Utc>,
  pub emotion:     String,
  pub is_daily:    bool,
}

impl NewMood {
  pub fn new(student_id: StudentId, input: MoodInput, recorded_at: DateTime<Utc>) -> Self {
    Self {
      student_id,
      recorded_at,
      emotion: input.emotion,
      is_daily: input.is_daily,
    }
  }

  pub fn into_mood(self, id: i64) -> Mood {
    Mood {
      id,
      student_id: self.student_id,
      recorded_at: self.recorded_at,
      emotion: self.emotion,
      is_daily: self.is_daily,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn student_id_parses_integers_only() {
    assert_eq!("7".parse::<StudentId>().unwrap(), StudentId(7));
    assert!(matches!("seven".parse::<StudentId>(), Err(Error::InvalidStudentId(_))));
    assert!(" 7".parse::<StudentId>().is_err());
  }

  #[test]
  fn input_ignores_identity_and_timestamp_fields() {
    let input: MoodInput = serde_json::from_str(
      r#"{"emotion":"sad","is_daily":true,"student_id":99,"recorded_at":"2001-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(input, MoodInput { emotion: "sad".into(), is_daily: true });
  }

  #[test]
  fn mood_serialises_student_id_as_number() {
    let now = Utc::now();
    let mood = NewMood::new(
      StudentId(3),
      MoodInput { emotion: "happy".into(), is_daily: false },
      now,
    )
    .into_mood(11);
    let v = serde_json::to_value(&mood).unwrap();
    assert_eq!(v["id"], 11);
    assert_eq!(v["student_id"], 3);
    assert_eq!(v["emotion"], "happy");
    assert_eq!(v["is_daily"], false);
    assert!(v["recorded_at"].as_str().is_some_and(|s| !s.is_empty()));
  }
}
