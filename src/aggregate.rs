// Queued job aggregation.
// Walks an organization's repositories and sums their queued workflow runs.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::github::{GitHubClient, Repository, WorkflowRun};

/// Source of repositories and workflow runs.
#[async_trait]
pub trait RunSource: Send + Sync {
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>>;

    async fn list_workflow_runs(&self, repo_full_name: &str) -> Result<Vec<WorkflowRun>>;
}

#[async_trait]
impl RunSource for GitHubClient {
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        GitHubClient::list_repositories(self, org).await
    }

    async fn list_workflow_runs(&self, repo_full_name: &str) -> Result<Vec<WorkflowRun>> {
        GitHubClient::list_workflow_runs(self, repo_full_name).await
    }
}

/// Counts queued jobs for a single organization.
pub struct QueuedJobCounter<S> {
    source: S,
    org: String,
}

impl<S: RunSource> QueuedJobCounter<S> {
    pub fn new(source: S, org: impl Into<String>) -> Self {
        Self {
            source,
            org: org.into(),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// Total queued workflow runs across every repository of the organization.
    ///
    /// Repositories are visited in upstream order. The first failure aborts
    /// the pass; no partial total is ever returned.
    pub async fn count_queued_jobs(&self) -> Result<u64> {
        let repos = self.source.list_repositories(&self.org).await?;

        let mut total = 0;
        for repo in &repos {
            let runs = self.source.list_workflow_runs(&repo.full_name).await?;
            let queued = runs.iter().filter(|run| run.is_queued()).count() as u64;
            debug!(repo = %repo.full_name, queued, "counted workflow runs");
            total += queued;
        }

        info!(org = %self.org, repos = repos.len(), queued = total, "queued jobs counted");
        Ok(total)
    }
}
