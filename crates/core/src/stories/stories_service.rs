use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use storywatch_feed::{FeedProvider, FeedStory};
use storywatch_notify::Notifier;

use crate::errors::Result;
use crate::stories::stories_model::{PassSummary, Story};
use crate::stories::stories_traits::{StoryRepositoryTrait, StoryServiceTrait};

/// Reconciles feed responses against the story repository.
///
/// The service holds no state between passes. A story moves from unseen to
/// seen exactly once, when its `create` succeeds, and that is the only point
/// where a notification is sent for it.
pub struct StoryService {
    repository: Arc<dyn StoryRepositoryTrait>,
    feed: Arc<dyn FeedProvider>,
    notifier: Arc<dyn Notifier>,
}

impl StoryService {
    pub fn new(
        repository: Arc<dyn StoryRepositoryTrait>,
        feed: Arc<dyn FeedProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        StoryService {
            repository,
            feed,
            notifier,
        }
    }

    async fn reconcile(&self, candidate: FeedStory, summary: &mut PassSummary) -> Result<()> {
        if self.repository.lookup(&candidate.id)?.is_some() {
            self.repository
                .refresh_points(&candidate.id, candidate.points)
                .await?;
            summary.refreshed += 1;
            return Ok(());
        }

        let story = Story::from(candidate);
        match self.repository.create(story.clone()).await {
            Ok(_) => {}
            Err(e) if e.is_conflict() => {
                // Another pass created it after our lookup; it owns the notification.
                debug!("Story {} was created concurrently, refreshing", story.id);
                self.repository
                    .refresh_points(&story.id, story.points)
                    .await?;
                summary.refreshed += 1;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
        summary.created += 1;
        info!("New story {}: {}", story.id, story.title);

        if let Err(e) = self.notifier.notify(&story.title, &story.url).await {
            warn!("Notification for story {} failed: {}", story.id, e);
            summary.failed_notifications += 1;
        }
        summary.notifications += 1;
        Ok(())
    }
}

#[async_trait]
impl StoryServiceTrait for StoryService {
    fn get_stories(&self) -> Result<Vec<Story>> {
        self.repository.list()
    }

    async fn run_pass(&self) -> Result<PassSummary> {
        self.repository.ensure_ready().await?;

        let candidates = self.feed.fetch_candidates().await?;
        info!(
            "Fetched {} stories from {}",
            candidates.len(),
            self.feed.id()
        );

        let mut summary = PassSummary::default();
        for candidate in candidates {
            self.reconcile(candidate, &mut summary).await?;
        }

        info!(
            "Pass finished: {} notifications ({} failed), {} created, {} refreshed",
            summary.notifications,
            summary.failed_notifications,
            summary.created,
            summary.refreshed
        );
        Ok(summary)
    }
}
