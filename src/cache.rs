// TTL cache for the queued job count.
// One entry behind one async lock; stale reads recompute while holding it.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Default TTL for the cached count: 60 seconds.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Whether the stored count may be served as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Computed less than one TTL ago.
    Fresh,
    /// Never computed, or at least one TTL old.
    Stale,
}

/// The cached count and when it was last computed successfully.
#[derive(Debug, Default)]
struct CacheEntry {
    count: u64,
    computed_at: Option<Instant>,
}

impl CacheEntry {
    fn freshness(&self, now: Instant, ttl: Duration) -> Freshness {
        match self.computed_at {
            Some(at) if now.saturating_duration_since(at) < ttl => Freshness::Fresh,
            _ => Freshness::Stale,
        }
    }
}

/// Single-value cache with single-flight recomputation.
///
/// The lock is held for the whole of [`TtlCache::get`], recomputation
/// included. While one caller recomputes, every other caller waits on the
/// lock and then finds the entry fresh, so concurrent stale reads collapse
/// into one upstream crawl.
#[derive(Debug)]
pub struct TtlCache {
    entry: Mutex<CacheEntry>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: Mutex::new(CacheEntry::default()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached count, running `recompute` first if it is stale.
    ///
    /// A failed recompute leaves the entry untouched and its error is
    /// returned as is; the stale count is not served in its place.
    pub async fn get<F, Fut, E>(&self, recompute: F) -> Result<u64, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<u64, E>>,
        E: std::fmt::Display,
    {
        let mut entry = self.entry.lock().await;

        if entry.freshness(Instant::now(), self.ttl) == Freshness::Fresh {
            debug!(count = entry.count, "returning cached result");
            return Ok(entry.count);
        }

        // Recomputing: the guard stays held until the future settles.
        let started = Instant::now();
        match recompute().await {
            Ok(count) => {
                entry.count = count;
                entry.computed_at = Some(Instant::now());
                info!(count, elapsed = ?started.elapsed(), "cache refreshed");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "cache refresh failed");
                Err(e)
            }
        }
    }
}
