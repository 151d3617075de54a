// HTTP surface.
// Exposes the cached queued job count at GET /queued_jobs.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::aggregate::{QueuedJobCounter, RunSource};
use crate::cache::TtlCache;

/// Shared state for the queued jobs route.
pub struct ScalerState<S> {
    pub cache: Arc<TtlCache>,
    pub counter: Arc<QueuedJobCounter<S>>,
}

impl<S> Clone for ScalerState<S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            counter: self.counter.clone(),
        }
    }
}

/// Body of a successful `/queued_jobs` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedJobs {
    pub queued_jobs: u64,
}

pub fn build_router<S: RunSource + 'static>(state: ScalerState<S>) -> Router {
    Router::new()
        .route("/queued_jobs", get(queued_jobs::<S>))
        .with_state(state)
}

async fn queued_jobs<S: RunSource + 'static>(State(state): State<ScalerState<S>>) -> Response {
    // Detached so a disconnecting client cannot cancel a crawl other callers are waiting on.
    let refresh = tokio::spawn(async move {
        let counter = state.counter.clone();
        state
            .cache
            .get(|| async move { counter.count_queued_jobs().await })
            .await
    });

    let detail = match refresh.await {
        Ok(Ok(queued_jobs)) => return Json(QueuedJobs { queued_jobs }).into_response(),
        Ok(Err(e)) => e.to_string(),
        Err(e) => e.to_string(),
    };

    error!(error = %detail, "error counting queued jobs");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("error counting queued jobs: {}", detail),
    )
        .into_response()
}
