//! Storywatch Core - Domain entities, services, and traits.
//!
//! This crate contains the reconciliation logic that turns a feed response
//! into stored stories and notifications. It is database-agnostic and
//! defines the repository trait implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod stories;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
