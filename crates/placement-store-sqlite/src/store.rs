//! [`SqliteStore`] — the SQLite implementation of [`PlacementStore`].

use std::path::Path;

use placement_core::{
  employer::{Employer, EmployerInput, EmployerSummary},
  mood::{Mood, NewMood, StudentId},
  store::PlacementStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{
    EMPLOYER_COLUMNS, MOOD_COLUMNS, RawMood, employer_from_row, encode_dt, summary_from_row,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A placement store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("schema initialised");
    Ok(())
  }
}

// ─── PlacementStore impl ─────────────────────────────────────────────────────

impl PlacementStore for SqliteStore {
  type Error = Error;

  // ── Employers ─────────────────────────────────────────────────────────────

  async fn create_employer(&self, input: EmployerInput) -> Result<Employer> {
    let employer = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "INSERT INTO employer (
             name, contact_number, address_line1, address_line2, address_line3,
             addr_long, addr_lat
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
           RETURNING {EMPLOYER_COLUMNS}"
        );
        Ok(conn.query_row(
          &sql,
          rusqlite::params![
            input.name,
            input.contact_number,
            input.address_line_1,
            input.address_line_2,
            input.address_line_3,
            input.longitude,
            input.latitude,
          ],
          employer_from_row,
        )?)
      })
      .await?;
    Ok(employer)
  }

  async fn get_employer(&self, id: i64) -> Result<Option<Employer>> {
    let employer = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {EMPLOYER_COLUMNS} FROM employer WHERE id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], employer_from_row)
            .optional()?,
        )
      })
      .await?;
    Ok(employer)
  }

  async fn update_employer(&self, id: i64, input: EmployerInput) -> Result<u64> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE employer SET
             name = ?1, contact_number = ?2,
             address_line1 = ?3, address_line2 = ?4, address_line3 = ?5,
             addr_long = ?6, addr_lat = ?7
           WHERE id = ?8",
          rusqlite::params![
            input.name,
            input.contact_number,
            input.address_line_1,
            input.address_line_2,
            input.address_line_3,
            input.longitude,
            input.latitude,
            id,
          ],
        )?)
      })
      .await?;
    Ok(affected as u64)
  }

  async fn delete_employer(&self, id: i64) -> Result<u64> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM employer WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected as u64)
  }

  async fn list_employer_summaries(&self) -> Result<Vec<EmployerSummary>> {
    let summaries = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, name FROM employer")?;
        let rows = stmt
          .query_map([], summary_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(summaries)
  }

  // ── Moods ─────────────────────────────────────────────────────────────────

  async fn list_moods(&self) -> Result<Vec<Mood>> {
    let raws: Vec<RawMood> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT {MOOD_COLUMNS} FROM mood"))?;
        let rows = stmt
          .query_map([], RawMood::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawMood::into_mood).collect()
  }

  async fn get_mood(&self, id: &str, student_id: StudentId) -> Result<Mood> {
    // Bound as text; the column's integer affinity does the comparison.
    let id = id.to_owned();

    let raw: RawMood = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {MOOD_COLUMNS} FROM mood WHERE id = ?1 AND student_id = ?2");
        Ok(conn.query_row(&sql, rusqlite::params![id, student_id.0], RawMood::from_row)?)
      })
      .await?;

    raw.into_mood()
  }

  async fn create_mood(&self, input: NewMood) -> Result<Mood> {
    let student_id = input.student_id.0;
    let at_str     = encode_dt(input.recorded_at);
    let emotion    = input.emotion.clone();
    let is_daily   = input.is_daily;

    let id: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO mood (student_id, emotion, is_daily, recorded_at)
           VALUES (?1, ?2, ?3, ?4) RETURNING id",
          rusqlite::params![student_id, emotion, is_daily, at_str],
          |row| row.get(0),
        )?)
      })
      .await?;

    Ok(input.into_mood(id))
  }
}
