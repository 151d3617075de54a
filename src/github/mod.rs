// GitHub API module.
// Provides the client and types for the organization repository and workflow run listings.

pub mod client;
pub mod endpoints;
pub mod types;
pub mod url;

pub use client::GitHubClient;
pub use types::{RateLimit, Repository, RunStatus, WorkflowRun};
pub use url::{GITHUB_API_BASE, build_api_url};
