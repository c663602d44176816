//! Hacker News feed provider implementation.
//!
//! Stories come from the Algolia HN search API:
//! - `/api/v1/search` filtered to `story` and `front_page` tags
//! - A free-text `query` selects the topic (e.g. "python")
//!
//! API documentation: https://hn.algolia.com/api

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::FeedError;
use crate::models::FeedStory;
use crate::provider::FeedProvider;

const BASE_URL: &str = "https://hn.algolia.com/api/v1/search";
const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";
const PROVIDER_ID: &str = "HACKER_NEWS";

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 512;

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /search endpoint
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
    // Note: nbHits, page, nbPages, hitsPerPage exist but a single page is all we read
}

/// Individual search hit
#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "objectID")]
    object_id: String,
    title: Option<String>,
    /// Missing for Ask HN and other text posts
    url: Option<String>,
    points: Option<i64>,
}

// ============================================================================
// HackerNewsProvider
// ============================================================================

/// Hacker News front page provider.
pub struct HackerNewsProvider {
    client: Client,
    query: String,
    base_url: String,
}

impl HackerNewsProvider {
    /// Create a provider searching front page stories for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("storywatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            query: query.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different search endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full search URL for the configured query.
    pub fn search_url(&self) -> Result<Url, FeedError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("query", self.query.as_str()),
                ("tags", "story"),
                ("tags", "front_page"),
            ],
        )
        .map_err(|e| FeedError::InvalidUrl {
            provider: PROVIDER_ID.to_string(),
            message: format!("{}: {}", self.base_url, e),
        })
    }

    /// Parse a search response body into candidate stories, keeping hit order.
    fn parse_stories(body: &str) -> Result<Vec<FeedStory>, FeedError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| FeedError::Malformed {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        response
            .hits
            .into_iter()
            .map(|hit| {
                let title = hit.title.ok_or_else(|| FeedError::Malformed {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("hit {} has no title", hit.object_id),
                })?;
                let url = match hit.url {
                    Some(url) if !url.trim().is_empty() => url,
                    _ => format!("{}{}", ITEM_URL, hit.object_id),
                };
                Ok(FeedStory {
                    id: hit.object_id,
                    title,
                    url,
                    points: hit.points.unwrap_or(0),
                })
            })
            .collect()
    }
}

#[async_trait]
impl FeedProvider for HackerNewsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_candidates(&self) -> Result<Vec<FeedStory>, FeedError> {
        let url = self.search_url()?;
        debug!("Hacker News request: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                FeedError::Network {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                body: truncate_error_body(body),
            });
        }

        let body = response.text().await.map_err(|e| FeedError::Network {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to read response: {}", e),
        })?;

        let stories = Self::parse_stories(&body)?;
        debug!("Hacker News returned {} stories", stories.len());
        Ok(stories)
    }
}

/// Cap an error body at `MAX_ERROR_BODY` bytes on a char boundary.
fn truncate_error_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let cut = (0..=MAX_ERROR_BODY)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        body.truncate(cut);
    }
    body
}
