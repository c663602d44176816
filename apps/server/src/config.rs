use std::{net::SocketAddr, path::Path, time::Duration};

use anyhow::{anyhow, Context};
use chrono::NaiveTime;
use storywatch_notify::DEFAULT_HOST;

pub const DEFAULT_TOPIC: &str = "hackernews_python_stories";
pub const DEFAULT_FEED_QUERY: &str = "python";

/// Process configuration, built once at startup and handed to every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Notification server host
    pub host: String,
    /// Notification topic; also names the story database
    pub topic: String,
    pub feed_query: String,
    pub data_dir: String,
    /// Daily scan time, UTC
    pub schedule_time: NaiveTime,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let listen_addr: SocketAddr = var("SW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid SW_LISTEN_ADDR")?;

        let host = var("HOST", DEFAULT_HOST);
        let topic = var("TOPIC", DEFAULT_TOPIC);
        if !topic
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(anyhow!(
                "Invalid TOPIC '{}': only letters, digits, '_' and '-' are allowed",
                topic
            ));
        }

        let schedule = var("SW_SCHEDULE_UTC", "18:00");
        let schedule_time = NaiveTime::parse_from_str(&schedule, "%H:%M")
            .with_context(|| format!("Invalid SW_SCHEDULE_UTC '{}', expected HH:MM", schedule))?;

        let timeout_ms: u64 = var("SW_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid SW_REQUEST_TIMEOUT_MS")?;

        Ok(Self {
            listen_addr,
            host,
            topic,
            feed_query: var("SW_FEED_QUERY", DEFAULT_FEED_QUERY),
            data_dir: var("SW_DATA_DIR", "./db"),
            schedule_time,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Story database file, named after the topic.
    pub fn db_path(&self) -> String {
        Path::new(&self.data_dir)
            .join(format!("{}.db", self.topic))
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "ntfy.sh");
        assert_eq!(config.topic, "hackernews_python_stories");
        assert_eq!(config.feed_query, "python");
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.schedule_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.db_path().ends_with("hackernews_python_stories.db"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "ntfy.example.com"),
            ("TOPIC", "rust-stories"),
            ("SW_FEED_QUERY", "rust"),
            ("SW_DATA_DIR", "/var/lib/storywatch"),
            ("SW_SCHEDULE_UTC", "07:30"),
        ])
        .unwrap();
        assert_eq!(config.host, "ntfy.example.com");
        assert_eq!(config.topic, "rust-stories");
        assert_eq!(config.feed_query, "rust");
        assert_eq!(config.schedule_time, NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert_eq!(
            Path::new(&config.db_path()),
            Path::new("/var/lib/storywatch/rust-stories.db")
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("HOST", "  "), ("TOPIC", "")]).unwrap();
        assert_eq!(config.host, "ntfy.sh");
        assert_eq!(config.topic, "hackernews_python_stories");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("TOPIC", "../etc/passwd")]).is_err());
        assert!(config_from(&[("SW_SCHEDULE_UTC", "25:00")]).is_err());
        assert!(config_from(&[("SW_LISTEN_ADDR", "nowhere")]).is_err());
        assert!(config_from(&[("SW_REQUEST_TIMEOUT_MS", "soon")]).is_err());
    }
}
