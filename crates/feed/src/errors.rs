//! Error types for the feed crate.

use thiserror::Error;

/// Errors that can occur while fetching candidate stories.
///
/// Every variant is fatal to the reconciliation pass that requested the
/// fetch. Nothing in this crate retries.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request could not be sent or the connection failed.
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider that failed
        provider: String,
        /// Transport error description
        message: String,
    },

    /// The request to the feed timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The feed answered with a non-success HTTP status.
    #[error("Unexpected status from {provider}: HTTP {status} - {body}")]
    Status {
        /// The provider that returned the status
        provider: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The configured search endpoint is not a valid URL.
    #[error("Invalid URL for {provider}: {message}")]
    InvalidUrl {
        /// The provider with the bad endpoint
        provider: String,
        /// URL parse error description
        message: String,
    },

    /// The response body could not be parsed into stories.
    #[error("Malformed response from {provider}: {message}")]
    Malformed {
        /// The provider whose response was malformed
        provider: String,
        /// Parse error description
        message: String,
    },
}
