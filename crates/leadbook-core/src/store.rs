//! The `LeadStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `leadbook-store-json`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::lead::{Lead, LeadPatch};

/// Abstraction over a durable lead collection.
///
/// The backing collection is ordered; every operation observes and preserves
/// insertion order. Each operation sees a fully-consistent snapshot — a
/// backend must never expose a partially written collection.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LeadStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every lead in insertion order.
  ///
  /// A backing store that has never been written is the defined empty
  /// state, not an error.
  fn load_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Lead>, Self::Error>> + Send + '_;

  /// Atomically replace the full collection with `leads`.
  fn save_all(
    &self,
    leads: Vec<Lead>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Append one lead to the end of the collection.
  fn append(
    &self,
    lead: Lead,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Apply `patch` to the lead whose id matches `id` exactly and persist.
  ///
  /// Returns the updated record, or `None` if no such id exists, in which
  /// case nothing is written.
  fn update_by_id<'a>(
    &'a self,
    id: &'a str,
    patch: LeadPatch,
  ) -> impl Future<Output = Result<Option<Lead>, Self::Error>> + Send + 'a;
}
