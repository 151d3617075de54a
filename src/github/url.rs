// API URL construction.
// Public GitHub serves the REST API at its root; Enterprise Server under /api/v3.

/// Origin of the public GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Build the full URL for an API endpoint relative to `base_url`.
///
/// A single trailing slash on `base_url` is dropped before joining.
pub fn build_api_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    if base_url.starts_with(GITHUB_API_BASE) {
        format!("{}/{}", base, endpoint)
    } else {
        format!("{}/api/v3/{}", base, endpoint)
    }
}
