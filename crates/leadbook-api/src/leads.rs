//! Handlers for `/leads` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `GET`   | `/leads` | Optional `?q=` and `?status=` filters, ANDed |
//! | `POST`  | `/leads` | Body: creation fields; 400 if name/email missing |
//! | `PATCH` | `/leads/:id` | Body: subset of `{status, notes}`; 404 if unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use leadbook_core::{
  lead::{Lead, LeadPatch, NewLead},
  store::LeadStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Case-insensitive substring matched against the concatenation of
  /// `name` and `company`.
  pub q:      Option<String>,
  /// Case-insensitive exact match against the stored status.
  pub status: Option<String>,
}

/// `GET /leads[?q=...][&status=...]`
///
/// Filters are independently optional and combine conjunctively; an empty
/// parameter is treated as absent. Relative order of the stored collection
/// is preserved.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Lead>>, ApiError>
where
  S: LeadStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut leads = store
    .load_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if let Some(q) = params.q.as_deref().filter(|q| !q.is_empty()) {
    let needle = q.to_lowercase();
    leads.retain(|l| {
      format!("{}{}", l.name, l.company)
        .to_lowercase()
        .contains(&needle)
    });
  }

  if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
    leads.retain(|l| l.status.as_str().eq_ignore_ascii_case(status));
  }

  Ok(Json(leads))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /leads` — body: `{name, email, company?, source?, notes?}`
///
/// Responds 201 with the stored record. A missing or non-JSON body reads
/// as empty input, so it fails the same 400 validation as an empty object.
/// The store is not touched on validation failure.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Option<Json<NewLead>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: LeadStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = body.map(|Json(b)| b).unwrap_or_default();
  let lead =
    Lead::create(input).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  store
    .append(lead.clone())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((StatusCode::CREATED, Json(lead)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /leads/:id` — body: JSON subset of `{status, notes}`.
///
/// Keys outside the allowed set are ignored. An unknown id responds 404
/// without writing.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Json(patch): Json<LeadPatch>,
) -> Result<Json<Lead>, ApiError>
where
  S: LeadStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let lead = store
    .update_by_id(&id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::NotFound)?;

  Ok(Json(lead))
}
