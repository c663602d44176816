//! Storywatch Feed Crate
//!
//! This crate fetches candidate stories from an external, read-only feed.
//!
//! # Overview
//!
//! A feed provider performs exactly one request per call and maps the
//! response into an ordered list of [`FeedStory`] values. Providers never
//! retry: retry policy belongs to whoever triggers the fetch.
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  Trigger/Caller  | --> |   FeedProvider   | --> |  Vec<FeedStory>  |
//! +------------------+     +------------------+     +------------------+
//!                                   |
//!                                   v
//!                          Hacker News (Algolia)
//! ```
//!
//! # Core Types
//!
//! - [`FeedProvider`] - Trait implemented by every feed source
//! - [`HackerNewsProvider`] - Algolia search API over the HN front page
//! - [`FeedStory`] - Candidate story as returned by the feed
//! - [`FeedError`] - Transport, status, endpoint and parse failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::FeedError;
pub use models::FeedStory;
pub use provider::hacker_news::HackerNewsProvider;
pub use provider::FeedProvider;
