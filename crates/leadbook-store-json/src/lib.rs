//! Flat-file JSON backend for the Leadbook store.
//!
//! The whole collection lives in one pretty-printed JSON file. Every write
//! rewrites the file through a temp-file-and-rename so readers never observe
//! a half-written store.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;

#[cfg(test)]
mod tests;
