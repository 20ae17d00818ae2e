//! Error types for `leadbook-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Creation input is missing `name` or `email`, or supplied them empty.
  /// The message is part of the wire contract.
  #[error("Name and email are required")]
  MissingRequiredFields,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
