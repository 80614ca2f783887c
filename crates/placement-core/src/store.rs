//! The `PlacementStore` trait: the persistence gateway behind every handler.
//!
//! The trait is implemented by storage backends (e.g. `placement-store-sqlite`).
//! The HTTP layer depends on this abstraction and receives a handle by
//! injection, so handlers can be exercised against a substitute store.

use std::future::Future;

use crate::{
  employer::{Employer, EmployerInput, EmployerSummary},
  mood::{Mood, NewMood, StudentId},
};

/// Abstraction over a relational store holding employers and mood entries.
///
/// Each method is a single statement round trip; nothing here spans a
/// transaction. All methods return `Send` futures so the trait can be used
/// from a multi-threaded runtime.
pub trait PlacementStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Employers ─────────────────────────────────────────────────────────

  /// Insert an employer and return the persisted row, including its new id.
  fn create_employer(
    &self,
    input: EmployerInput,
  ) -> impl Future<Output = Result<Employer, Self::Error>> + Send + '_;

  /// Fetch an employer by id. Returns `None` if no row matches.
  fn get_employer(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employer>, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of an employer. Returns the number of
  /// rows affected (zero when `id` does not exist).
  fn update_employer(
    &self,
    id: i64,
    input: EmployerInput,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Delete an employer. Returns the number of rows affected.
  fn delete_employer(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Every employer's id and name, in whatever order the store yields them.
  fn list_employer_summaries(
    &self,
  ) -> impl Future<Output = Result<Vec<EmployerSummary>, Self::Error>> + Send + '_;

  // ── Moods ─────────────────────────────────────────────────────────────

  /// Every mood entry across all students.
  fn list_moods(&self) -> impl Future<Output = Result<Vec<Mood>, Self::Error>> + Send + '_;

  /// Fetch one mood entry, restricted to `student_id`.
  ///
  /// `id` is bound exactly as received. A missing row is reported as an
  /// error, not as `None`.
  fn get_mood<'a>(
    &'a self,
    id: &'a str,
    student_id: StudentId,
  ) -> impl Future<Output = Result<Mood, Self::Error>> + Send + 'a;

  /// Insert a mood entry and return it with its store-assigned id.
  fn create_mood(
    &self,
    input: NewMood,
  ) -> impl Future<Output = Result<Mood, Self::Error>> + Send + '_;
}
