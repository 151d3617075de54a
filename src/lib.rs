// github-runner-scaler library.
// Counts queued GitHub Actions jobs for an organization and caches the result.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod server;

pub use aggregate::{QueuedJobCounter, RunSource};
pub use cache::TtlCache;
pub use config::Config;
pub use error::{Result, ScalerError};
pub use github::GitHubClient;
pub use server::{QueuedJobs, ScalerState, build_router};
