// GitHub API response types.
// Only the fields the queued-job count depends on are decoded.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

/// GitHub Actions workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    pub status: RunStatus,
}

impl WorkflowRun {
    pub fn is_queued(&self) -> bool {
        self.status == RunStatus::Queued
    }
}

/// Workflow run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Waiting,
    Requested,
    Pending,
    #[serde(other)]
    Unknown,
}

/// Response wrapper for workflow runs list.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowRunsResponse {
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Read the `x-ratelimit-*` headers. Returns `None` when the upstream
    /// sent none of them.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        let limit = read("x-ratelimit-limit");
        let remaining = read("x-ratelimit-remaining");
        let reset = read("x-ratelimit-reset");
        if limit.is_none() && remaining.is_none() && reset.is_none() {
            return None;
        }

        Some(Self {
            limit: limit.unwrap_or_default(),
            remaining: remaining.unwrap_or_default(),
            reset: reset.unwrap_or_default(),
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }

    /// Reset time as a wall-clock timestamp.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset as i64, 0)
    }
}
