//! Feed provider abstractions and implementations.
//!
//! This module contains:
//! - The `FeedProvider` trait that all providers implement
//! - Concrete provider implementations (Hacker News)

mod traits;

pub mod hacker_news;

pub use traits::FeedProvider;
