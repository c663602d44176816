//! Feed data models.

use serde::{Deserialize, Serialize};

/// A candidate story as returned by a feed for the current pass.
///
/// Candidates are not persisted directly; the reconciler turns them into
/// stored stories the first time their `id` is seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStory {
    /// Stable external identifier
    pub id: String,
    pub title: String,
    pub url: String,
    /// Score at the time of the fetch
    pub points: i64,
}

impl FeedStory {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        points: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            points,
        }
    }
}
