//! Request extractors shared by the employer and mood handlers.
//!
//! Each one rejects with a 400 [`ApiError`] before any store access. The
//! parts extractors ([`EmployerId`], [`Student`]) run ahead of the body
//! extractor, so an invalid id or header wins over a malformed body.

use axum::{
  extract::{FromRequest, FromRequestParts, Path, Request},
  http::request::Parts,
};
use bytes::Bytes;
use placement_core::{employer::parse_employer_id, mood::StudentId};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Header carrying the acting student's identifier.
pub const STUDENT_ID_HEADER: &str = "student-id";

// ─── Employer id ─────────────────────────────────────────────────────────────

/// The `{id}` path segment of an employer route, parsed as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployerId(pub i64);

impl<S> FromRequestParts<S> for EmployerId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let invalid = || ApiError::BadRequest("Invalid ID".to_string());
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
      .await
      .map_err(|_| invalid())?;
    parse_employer_id(&raw).map(EmployerId).map_err(|_| invalid())
  }
}

// ─── Student identity ────────────────────────────────────────────────────────

/// The student on whose behalf a mood request acts.
///
/// Read from the `student-id` header and trusted as-is; no token or
/// signature is checked. Handlers only see the resulting [`StudentId`], so a
/// verified identity source can replace this impl without touching them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Student(pub StudentId);

impl<S> FromRequestParts<S> for Student
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let raw = match parts.headers.get(STUDENT_ID_HEADER) {
      Some(v) if !v.is_empty() => v,
      _ => {
        tracing::warn!("missing {STUDENT_ID_HEADER} header");
        return Err(ApiError::BadRequest("Missing student-id header".to_string()));
      }
    };

    raw
      .to_str()
      .ok()
      .and_then(|s| s.parse::<StudentId>().ok())
      .map(Student)
      .ok_or_else(|| {
        tracing::warn!(value = ?raw, "invalid {STUDENT_ID_HEADER} header");
        ApiError::BadRequest("Invalid student-id header".to_string())
      })
  }
}

// ─── JSON body ───────────────────────────────────────────────────────────────

/// A JSON request body decoded regardless of `Content-Type`.
///
/// Unlike [`axum::Json`], every decode failure is a 400 carrying the
/// `serde_json` message verbatim.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
  S: Send + Sync,
  T: DeserializeOwned,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let body = Bytes::from_request(req, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;
    serde_json::from_slice(&body)
      .map(JsonBody)
      .map_err(|e| ApiError::BadRequest(e.to_string()))
  }
}
