// Service configuration.
// Read from command-line flags, falling back to the environment.

use std::fmt::Display;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use tracing::warn;

use crate::cache::DEFAULT_TTL;
use crate::github::GITHUB_API_BASE;

/// Serves the number of queued GitHub Actions jobs for one organization.
#[derive(Parser, Debug, Clone)]
#[command(name = "github-runner-scaler", version, about)]
pub struct Config {
    /// GitHub API origin. Anything but the public API is treated as Enterprise Server.
    #[arg(long, env = "GITHUB_URL", default_value = GITHUB_API_BASE)]
    pub github_url: String,

    /// Organization whose repositories are scanned.
    #[arg(long, env = "GITHUB_ORGANIZATION")]
    pub organization: String,

    /// Access token sent as a bearer token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Seconds a computed count is served before it is recomputed.
    #[arg(long, env = "GITHUB_RUNNER_SCALER_CACHE_TIMEOUT")]
    pub cache_timeout: Option<String>,

    /// Seconds allowed for each GitHub API request. 0 disables the limit.
    #[arg(long, env = "GITHUB_RUNNER_SCALER_REQUEST_TIMEOUT")]
    pub request_timeout: Option<String>,

    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<String>,
}

/// Default for `--request-timeout`, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default for `--port`.
pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// API origin, with an empty value meaning public GitHub.
    pub fn github_url(&self) -> &str {
        if self.github_url.is_empty() {
            GITHUB_API_BASE
        } else {
            &self.github_url
        }
    }

    /// Cache TTL. An unparsable value is logged and replaced by the default.
    pub fn cache_ttl(&self) -> Duration {
        let default = DEFAULT_TTL.as_secs();
        Duration::from_secs(or_default(
            self.cache_timeout.as_deref(),
            "GITHUB_RUNNER_SCALER_CACHE_TIMEOUT",
            default,
        ))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        let secs = or_default(
            self.request_timeout.as_deref(),
            "GITHUB_RUNNER_SCALER_REQUEST_TIMEOUT",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        );
        (secs > 0).then(|| Duration::from_secs(secs))
    }

    pub fn listen_addr(&self) -> SocketAddr {
        let port = or_default(self.port.as_deref(), "PORT", DEFAULT_PORT);
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
    }
}

/// Parse an optional setting. Unset or blank means `default`; an
/// unparsable value is logged and also replaced by `default`.
fn or_default<T: FromStr>(raw: Option<&str>, name: &str, default: T) -> T
where
    T::Err: Display,
{
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!(value = raw, error = %e, "invalid {}, using default", name);
                default
            }
        },
    }
}
