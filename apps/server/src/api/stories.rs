use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use storywatch_core::stories::Story;

#[derive(Serialize)]
struct NotifyResponse {
    notifications: usize,
}

async fn list_stories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Story>>> {
    let stories = state.story_service.get_stories()?;
    Ok(Json(stories))
}

async fn scan_and_notify(State(state): State<Arc<AppState>>) -> ApiResult<Json<NotifyResponse>> {
    // Detached so a client disconnect or request timeout cannot cut a pass short.
    let service = state.story_service.clone();
    let summary = tokio::spawn(async move { service.run_pass().await })
        .await
        .map_err(|e| ApiError::Internal(format!("Reconciliation task failed: {}", e)))??;
    Ok(Json(NotifyResponse {
        notifications: summary.notifications,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_stories)).route(
        "/notify",
        get(scan_and_notify)
            .post(scan_and_notify)
            .put(scan_and_notify)
            .patch(scan_and_notify),
    )
}
