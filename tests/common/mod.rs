// In-process stand-in for the GitHub REST API.
// Serves canned responses by path and records every request it sees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
};
use tokio::net::TcpListener;

/// A request as received by the fake.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

#[derive(Default)]
struct Inner {
    responses: Mutex<HashMap<String, (StatusCode, String)>>,
    delays: Mutex<HashMap<String, Duration>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running fake GitHub server.
#[derive(Clone)]
pub struct FakeGitHub {
    pub base_url: String,
    inner: Arc<Inner>,
}

impl FakeGitHub {
    /// Bind to an ephemeral local port and start serving.
    pub async fn start() -> Self {
        let inner = Arc::new(Inner::default());
        let app = Router::new().fallback(serve).with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            inner,
        }
    }

    /// Respond to `path` with `status` and `body` from now on.
    pub fn respond(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    /// Hold every response to `path` for `delay` before sending it.
    pub fn delay(&self, path: &str, delay: Duration) {
        self.inner
            .delays
            .lock()
            .unwrap()
            .insert(path.to_string(), delay);
    }

    /// Serve a repository listing for `org` on the Enterprise API root.
    pub fn repos(&self, org: &str, full_names: &[&str]) {
        let repos: Vec<_> = full_names
            .iter()
            .map(|name| serde_json::json!({ "id": 1, "full_name": name, "private": false }))
            .collect();
        self.respond(
            &format!("/api/v3/orgs/{}/repos", org),
            StatusCode::OK,
            serde_json::to_string(&repos).unwrap(),
        );
    }

    /// Serve workflow runs with the given statuses for `full_name`.
    pub fn runs(&self, full_name: &str, statuses: &[&str]) {
        let runs: Vec<_> = statuses
            .iter()
            .enumerate()
            .map(|(id, status)| serde_json::json!({ "id": id, "status": status }))
            .collect();
        let body = serde_json::json!({ "total_count": runs.len(), "workflow_runs": runs });
        self.respond(
            &format!("/api/v3/repos/{}/actions/runs", full_name),
            StatusCode::OK,
            body.to_string(),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }
}

async fn serve(State(inner): State<Arc<Inner>>, uri: Uri, headers: HeaderMap) -> (StatusCode, String) {
    inner.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
    });

    let delay = inner.delays.lock().unwrap().get(uri.path()).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    inner
        .responses
        .lock()
        .unwrap()
        .get(uri.path())
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#.to_string()))
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
