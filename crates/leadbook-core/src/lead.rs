//! Lead — the sole entity tracked by the store.
//!
//! A lead is created once with its identity fields fixed; only `status` and
//! `notes` may change afterwards, and leads are never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Pipeline position of a lead. Wire values are the variant names verbatim
/// (`"New"`, `"Contacted"`, `"Qualified"`, `"Lost"`).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum LeadStatus {
  #[default]
  New,
  Contacted,
  Qualified,
  Lost,
}

impl LeadStatus {
  /// The wire string for this status.
  pub fn as_str(self) -> &'static str {
    match self {
      LeadStatus::New => "New",
      LeadStatus::Contacted => "Contacted",
      LeadStatus::Qualified => "Qualified",
      LeadStatus::Lost => "Lost",
    }
  }
}

// ─── Lead record ─────────────────────────────────────────────────────────────

/// A persisted lead record.
///
/// `id` and `created_at` are assigned at creation and never change. The
/// optional creation fields default to empty strings so the wire shape is
/// all-string, matching the stored layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub company:    String,
  pub source:     String,
  pub notes:      String,
  pub status:     LeadStatus,
  #[serde(rename = "createdAt")]
  pub created_at: DateTime<Utc>,
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Creation input. `name` and `email` are required and must be non-empty;
/// everything else defaults to an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLead {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub company: Option<String>,
  pub source:  Option<String>,
  pub notes:   Option<String>,
}

/// A partial update. Only `status` and `notes` are mutable after creation;
/// any other key in an inbound patch body is ignored, not rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPatch {
  pub status: Option<LeadStatus>,
  pub notes:  Option<String>,
}

// ─── Construction and mutation ───────────────────────────────────────────────

impl Lead {
  /// Build a persisted record from creation input.
  ///
  /// Assigns a fresh uuid-v4 id, stamps `created_at` with the current time,
  /// and starts the lead in [`LeadStatus::New`].
  pub fn create(input: NewLead) -> Result<Self> {
    let name = input.name.unwrap_or_default();
    let email = input.email.unwrap_or_default();
    if name.is_empty() || email.is_empty() {
      return Err(Error::MissingRequiredFields);
    }

    Ok(Self {
      id: Uuid::new_v4().simple().to_string(),
      name,
      email,
      company: input.company.unwrap_or_default(),
      source: input.source.unwrap_or_default(),
      notes: input.notes.unwrap_or_default(),
      status: LeadStatus::New,
      created_at: Utc::now(),
    })
  }

  /// Apply the fields present in `patch` in place. Absent fields are left
  /// untouched; an empty patch is a no-op.
  pub fn apply_patch(&mut self, patch: &LeadPatch) {
    if let Some(status) = patch.status {
      self.status = status;
    }
    if let Some(notes) = &patch.notes {
      self.notes = notes.clone();
    }
  }
}
