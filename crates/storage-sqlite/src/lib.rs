//! SQLite storage implementation for Storywatch.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository trait defined in `storywatch-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single writer actor that serialises all writes
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! ```text
//!     core (reconciler)
//!            │
//!            ▼
//!  storage-sqlite (this crate)
//!      │            │
//!  reads (pool)  writes (writer actor)
//!      └─────┬──────┘
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod stories;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from storywatch-core for convenience
pub use storywatch_core::errors::{DatabaseError, Error, Result};
