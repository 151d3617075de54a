// Error types for the runner scaler.
// Covers transport failures, unexpected upstream statuses, and body decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error fetching {context}: {status}")]
    UpstreamStatus { context: &'static str, status: String },

    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid GitHub token: {0}")]
    InvalidToken(String),
}

pub type Result<T> = std::result::Result<T, ScalerError>;
