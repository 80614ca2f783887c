//! Handlers for `/employers` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/employers` | Body: [`EmployerInput`]; returns 200 + stored employer |
//! | `GET`    | `/employers/ids-names` | `[{id, name}]`, store order |
//! | `GET`    | `/employers/:id` | 404 if not found |
//! | `PUT`    | `/employers/:id` | Full replace; 404 if not found |
//! | `DELETE` | `/employers/:id` | 204; a missing row is a 400, not a 404 |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use placement_core::{
  employer::{Employer, EmployerInput, EmployerSummary},
  store::PlacementStore,
};

use crate::{
  error::ApiError,
  extract::{EmployerId, JsonBody},
};

const NOT_FOUND: &str = "Employer not found";

/// Reported when the re-read after an update finds no row; matches the
/// SQLite driver's own no-row text.
const NO_ROWS: &str = "Query returned no rows";

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /employers`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(input): JsonBody<EmployerInput>,
) -> Result<Json<Employer>, ApiError>
where
  S: PlacementStore,
{
  let employer = store.create_employer(input).await.map_err(ApiError::store)?;
  tracing::debug!(id = employer.id, "employer created");
  Ok(Json(employer))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employers/:id`
pub async fn get_one<S>(
  EmployerId(id): EmployerId,
  State(store): State<Arc<S>>,
) -> Result<Json<Employer>, ApiError>
where
  S: PlacementStore,
{
  let employer = store
    .get_employer(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;
  Ok(Json(employer))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /employers/:id` — overwrites every field, then re-reads the row.
///
/// The write and the re-read are separate round trips. If the row is
/// deleted in between, the re-read finds nothing and the caller gets a 500.
pub async fn update_one<S>(
  EmployerId(id): EmployerId,
  State(store): State<Arc<S>>,
  JsonBody(input): JsonBody<EmployerInput>,
) -> Result<Json<Employer>, ApiError>
where
  S: PlacementStore,
{
  let affected = store
    .update_employer(id, input)
    .await
    .map_err(ApiError::store)?;
  if affected == 0 {
    return Err(ApiError::NotFound(NOT_FOUND.to_string()));
  }
  tracing::debug!(id, "employer updated");

  let employer = store
    .get_employer(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::Internal(NO_ROWS.to_string()))?;
  Ok(Json(employer))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employers/:id`
pub async fn delete_one<S>(
  EmployerId(id): EmployerId,
  State(store): State<Arc<S>>,
) -> Result<StatusCode, ApiError>
where
  S: PlacementStore,
{
  let affected = store.delete_employer(id).await.map_err(ApiError::store)?;
  if affected == 0 {
    // Existing clients expect 400 here.
    return Err(ApiError::BadRequest(NOT_FOUND.to_string()));
  }
  tracing::debug!(id, "employer deleted");
  Ok(StatusCode::NO_CONTENT)
}

// ─── Ids and names ────────────────────────────────────────────────────────────

/// `GET /employers/ids-names`
pub async fn ids_and_names<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<EmployerSummary>>, ApiError>
where
  S: PlacementStore,
{
  let summaries = store
    .list_employer_summaries()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(summaries))
}
