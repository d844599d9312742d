//! Shared read cache keyed by resolved query identity.
//!
//! Single-writer (the fetch/mutation layer), many-reader discipline:
//! readers go through [`QueryCache::get_or_fetch`], which serves fresh
//! entries from memory and collapses concurrent fetches of one key
//! into a single in-flight request; the mutation layer invalidates
//! keys after successful writes.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use festival_client::{ApiError, Result};
use tokio::sync::OnceCell;
use tracing::{debug, info};

type Stored = Arc<dyn Any + Send + Sync>;
type InFlight = Arc<OnceCell<Stored>>;

struct CacheEntry {
    value: Stored,
    stored_at: Instant,
}

#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, InFlight>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `key` from cache when fresh, otherwise fetch it, sharing
    /// one in-flight request among concurrent callers of the same key.
    /// Only successful fetches are cached; errors are returned to every
    /// waiter and never stored.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        stale_after: Duration,
        fetch: F,
    ) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.fresh(key, stale_after) {
            match hit.downcast::<T>() {
                Ok(value) => {
                    debug!(key, "cache hit");
                    return Ok(value);
                }
                // A different type under this key: treat as a miss.
                Err(_) => self.invalidate(key),
            };
        }

        let cell: InFlight = {
            let mut in_flight = lock(&self.in_flight);
            in_flight.entry(key.to_string()).or_default().clone()
        };
        let outcome = cell
            .get_or_try_init(|| async {
                debug!(key, "fetching");
                let value = fetch().await?;
                Ok::<Stored, ApiError>(Arc::new(value) as Stored)
            })
            .await
            .cloned();
        lock(&self.in_flight).remove(key);

        let value = outcome?;
        lock(&self.entries).insert(
            key.to_string(),
            CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            },
        );
        value
            .downcast::<T>()
            .map_err(|_| ApiError::Transport(format!("conflicting cached type for key {key}")))
    }

    /// Drop one exact key.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = lock(&self.entries).remove(key).is_some();
        if removed {
            info!(key, "cache entry invalidated");
        }
        removed
    }

    /// Drop a scope: the key itself plus every key nested under it.
    /// Matching is segment-aware, so `shows` covers `shows:7` but
    /// `comments:7` does not cover `comments:71`. Returns how many went.
    pub fn invalidate_scope(&self, scope: &str) -> usize {
        let nested = format!("{scope}:");
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|key, _| key != scope && !key.starts_with(&nested));
        let removed = before - entries.len();
        if removed > 0 {
            info!(scope, removed, "cache entries invalidated");
        }
        removed
    }

    /// Drop entries older than the retention window.
    pub fn sweep(&self, retention: Duration) -> usize {
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() <= retention);
        before - entries.len()
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    fn fresh(&self, key: &str, stale_after: Duration) -> Option<Stored> {
        let entries = lock(&self.entries);
        let entry = entries.get(key)?;
        (entry.stored_at.elapsed() <= stale_after).then(|| entry.value.clone())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
