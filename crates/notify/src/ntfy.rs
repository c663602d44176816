//! ntfy publisher.
//!
//! Publishing is a plain `POST https://{host}/{topic}` whose body is the
//! message. The story URL is the message, the story title goes in the
//! `Title` header and `Tags` selects the emoji shown by ntfy clients.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::HeaderValue;
use reqwest::{Client, Request};
use tracing::debug;

use crate::{Notifier, NotifyError};

pub const DEFAULT_HOST: &str = "ntfy.sh";
pub const NOTIFICATION_TAGS: &str = "snake";

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 512;

/// Publishes story alerts to an ntfy topic.
pub struct NtfyNotifier {
    client: Client,
    endpoint: String,
}

impl NtfyNotifier {
    pub fn new(host: &str, topic: &str) -> Self {
        Self::with_endpoint(format!(
            "https://{}/{}",
            host.trim_end_matches('/'),
            topic.trim_start_matches('/')
        ))
    }

    /// Publish to a fully specified topic URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, title: &str, url: &str) -> Result<Request, NotifyError> {
        let title = HeaderValue::from_str(&encode_title(title))
            .map_err(|e| NotifyError::InvalidHeader(e.to_string()))?;

        self.client
            .post(&self.endpoint)
            .header("Title", title)
            .header("Tags", NOTIFICATION_TAGS)
            .body(url.as_bytes().to_vec())
            .build()
            .map_err(|e| NotifyError::Network(e.to_string()))
    }
}

#[async_trait]
impl Notifier for NtfyNotifier {
    async fn notify(&self, title: &str, url: &str) -> Result<(), NotifyError> {
        let request = self.build_request(title, url)?;
        debug!("Publishing notification to {}", self.endpoint);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body: truncate_error_body(body),
            });
        }

        Ok(())
    }
}

/// Make a title safe for an HTTP header.
///
/// Control characters are dropped. Titles that are not plain printable
/// ASCII are sent as an RFC 2047 encoded word, which ntfy decodes.
pub fn encode_title(title: &str) -> String {
    let cleaned: String = title.chars().filter(|c| !c.is_control()).collect();
    if cleaned.chars().all(|c| (' '..='~').contains(&c)) {
        cleaned
    } else {
        format!("=?UTF-8?B?{}?=", STANDARD.encode(cleaned.as_bytes()))
    }
}

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
