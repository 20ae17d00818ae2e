//! Core types and trait definitions for the Leadbook lead tracker.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod lead;
pub mod store;

pub use error::{Error, Result};
