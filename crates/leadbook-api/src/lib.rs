//! JSON REST API for Leadbook.
//!
//! Exposes an axum [`Router`] backed by any [`leadbook_core::store::LeadStore`].
//! Static assets, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", leadbook_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod leads;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, patch},
};
use leadbook_core::store::LeadStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LeadStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/leads", get(leads::list::<S>).post(leads::create::<S>))
    .route("/leads/{id}", patch(leads::update::<S>))
    .with_state(store)
}
