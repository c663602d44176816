//! Stories domain models.

use serde::{Deserialize, Serialize};
use storywatch_feed::FeedStory;

/// Domain model representing a stored story.
///
/// `title` and `url` are fixed at creation; only `points` changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub url: String,
    pub points: i64,
}

impl From<FeedStory> for Story {
    fn from(candidate: FeedStory) -> Self {
        Self {
            id: candidate.id,
            title: candidate.title,
            url: candidate.url,
            points: candidate.points,
        }
    }
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PassSummary {
    /// Notifications issued for newly seen stories, delivered or not
    pub notifications: usize,
    pub created: usize,
    pub refreshed: usize,
    /// Notifications whose send reported an error
    pub failed_notifications: usize,
}
