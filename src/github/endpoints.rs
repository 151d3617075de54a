// GitHub API endpoint functions.
// Typed listings consumed by the queued-job aggregation. First page only.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Repository, WorkflowRun, WorkflowRunsResponse};

impl GitHubClient {
    /// Get repositories for an organization.
    pub async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>> {
        self.get_json(&format!("orgs/{}/repos", org), "repos").await
    }

    /// Get workflow runs for a repository given as `owner/repo`.
    pub async fn list_workflow_runs(&self, repo_full_name: &str) -> Result<Vec<WorkflowRun>> {
        let wrapper: WorkflowRunsResponse = self
            .get_json(
                &format!("repos/{}/actions/runs", repo_full_name),
                "workflow runs",
            )
            .await?;
        Ok(wrapper.workflow_runs)
    }
}
