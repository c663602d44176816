//! Feed provider trait definition.

use async_trait::async_trait;

use crate::errors::FeedError;
use crate::models::FeedStory;

/// Trait for story feed providers.
///
/// Implementations must be side-effect free so callers can invoke them
/// repeatedly and concurrently.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use storywatch_feed::{FeedError, FeedProvider, FeedStory};
///
/// struct StaticProvider(Vec<FeedStory>);
///
/// #[async_trait]
/// impl FeedProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn fetch_candidates(&self) -> Result<Vec<FeedStory>, FeedError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the current candidate stories.
    ///
    /// Performs a single request; the returned order is the feed's order.
    async fn fetch_candidates(&self) -> Result<Vec<FeedStory>, FeedError>;
}
