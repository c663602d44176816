//! Storywatch Notify Crate
//!
//! One-way, best-effort alerts for newly discovered stories.
//!
//! A [`Notifier`] pushes a single human-readable alert per call. Callers do
//! not wait for remote delivery confirmation beyond the HTTP response, and
//! nothing here retries: a failed send is reported as [`NotifyError`] and the
//! caller decides whether to log it and move on.
//!
//! [`NtfyNotifier`] publishes to an [ntfy](https://ntfy.sh) topic.

mod errors;
mod ntfy;

pub use errors::NotifyError;
pub use ntfy::{encode_title, NtfyNotifier, DEFAULT_HOST, NOTIFICATION_TAGS};

use async_trait::async_trait;

/// Trait for notification sinks.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one alert for a story.
    async fn notify(&self, title: &str, url: &str) -> Result<(), NotifyError>;
}
