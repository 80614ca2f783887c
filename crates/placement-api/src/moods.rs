//! Handlers for `/moods` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/moods` | Every entry, all students |
//! | `GET`  | `/moods/:id` | `student-id` header required; scoped to that student |
//! | `POST` | `/moods` | `student-id` header required; body: [`MoodInput`]; returns 201 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use placement_core::{
  mood::{Mood, MoodInput, NewMood},
  store::PlacementStore,
};

use crate::{
  error::ApiError,
  extract::{JsonBody, Student},
};

/// `GET /moods`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Mood>>, ApiError>
where
  S: PlacementStore,
{
  let moods = store.list_moods().await.map_err(ApiError::store)?;
  Ok(Json(moods))
}

/// `GET /moods/:id`
///
/// The id is handed to the store untouched. An entry owned by another
/// student looks exactly like a missing one, and both surface as a store
/// failure (500) rather than a 404.
pub async fn get_one<S>(
  Student(student_id): Student,
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Mood>, ApiError>
where
  S: PlacementStore,
{
  let mood = store
    .get_mood(&id, student_id)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(mood))
}

/// `POST /moods` — the student comes from the header and the timestamp from
/// the server clock; the body supplies only `emotion` and `is_daily`.
pub async fn create<S>(
  Student(student_id): Student,
  State(store): State<Arc<S>>,
  JsonBody(input): JsonBody<MoodInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PlacementStore,
{
  let mood = store
    .create_mood(NewMood::new(student_id, input, Utc::now()))
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(id = mood.id, %student_id, "mood recorded");
  Ok((StatusCode::CREATED, Json(mood)))
}
