//! Error type for `leadbook-store-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// The backing file exists but does not parse as a lead array.
  /// Distinct from [`Error::Io`] so callers can tell "disk broke" apart
  /// from "file broke".
  #[error("corrupt store at {path}: {source}")]
  Corrupt {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
