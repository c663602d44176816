use crate::errors::Result;
use crate::stories::stories_model::{PassSummary, Story};
use async_trait::async_trait;

/// Trait for story repository operations.
///
/// Every operation keys on `id`. Implementations must reject a `create` for
/// an existing id with `DatabaseError::UniqueViolation` rather than
/// overwrite it, and must report a `refresh_points` on a missing id as
/// `DatabaseError::NotFound`.
#[async_trait]
pub trait StoryRepositoryTrait: Send + Sync {
    /// Idempotent initialisation of the backing store.
    async fn ensure_ready(&self) -> Result<()>;
    /// `Ok(None)` means the story has never been seen.
    fn lookup(&self, story_id: &str) -> Result<Option<Story>>;
    fn list(&self) -> Result<Vec<Story>>;
    async fn create(&self, story: Story) -> Result<Story>;
    async fn refresh_points(&self, story_id: &str, points: i64) -> Result<()>;
}

/// Trait for story service operations
#[async_trait]
pub trait StoryServiceTrait: Send + Sync {
    fn get_stories(&self) -> Result<Vec<Story>>;
    /// Run one fetch, diff, persist, notify pass.
    async fn run_pass(&self) -> Result<PassSummary>;
}
