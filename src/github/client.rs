// GitHub API HTTP client.
// Handles authentication, API root selection, and response status/body checks.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, ScalerError};

use super::types::RateLimit;
use super::url::build_api_url;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client bound to one API origin and token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client for `base_url` authenticating with `token`.
    ///
    /// `timeout` bounds each request end to end; `None` leaves reqwest's default.
    pub fn new(base_url: &str, token: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ScalerError::InvalidToken(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("github-runner-scaler"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// `context` names the listing in upstream status errors.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        context: &'static str,
    ) -> Result<T> {
        let url = build_api_url(&self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        observe_rate_limit(&response);

        let response = check_response(response, context)?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Log rate limit headers; warn once the budget is spent.
fn observe_rate_limit(response: &Response) {
    let Some(rate_limit) = RateLimit::from_headers(response.headers()) else {
        return;
    };

    debug!(
        limit = rate_limit.limit,
        remaining = rate_limit.remaining,
        "GitHub rate limit"
    );

    if rate_limit.is_exhausted() {
        let reset_at = rate_limit
            .reset_at()
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        warn!(%reset_at, "GitHub rate limit exhausted");
    }
}

/// Anything but 200 is an upstream failure carrying the status line.
fn check_response(response: Response, context: &'static str) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        status => Err(ScalerError::UpstreamStatus {
            context,
            status: status.to_string(),
        }),
    }
}
