use std::sync::Arc;

use crate::config::Config;
use storywatch_core::stories::{StoryService, StoryServiceTrait};
use storywatch_feed::HackerNewsProvider;
use storywatch_notify::NtfyNotifier;
use storywatch_storage_sqlite::{db, stories::StoryRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub story_service: Arc<dyn StoryServiceTrait + Send + Sync>,
}

impl AppState {
    pub fn new(story_service: Arc<dyn StoryServiceTrait + Send + Sync>) -> Arc<Self> {
        Arc::new(Self { story_service })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("SW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path())?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(&pool)?;

    let story_repository = Arc::new(StoryRepository::new(pool, writer));
    let feed = Arc::new(HackerNewsProvider::new(config.feed_query.clone()));
    let notifier = Arc::new(NtfyNotifier::new(&config.host, &config.topic));
    tracing::info!(
        "Watching '{}' stories, notifying {}",
        config.feed_query,
        notifier.endpoint()
    );

    let story_service = Arc::new(StoryService::new(story_repository, feed, notifier));

    Ok(AppState::new(story_service))
}
