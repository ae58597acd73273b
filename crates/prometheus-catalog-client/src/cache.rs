//! Single-slot metadata cache with TTL expiration and single-flight refresh.
//!
//! The cache holds at most one snapshot, scoped to the client's lifetime.
//! A snapshot older than the TTL is refreshed by exactly one fetch; every
//! caller that observed the stale slot awaits the same in-flight future and
//! receives its result, success or failure. Failures are never stored, so
//! the next call after a failed refresh starts a fresh fetch.

use crate::error::ClientError;
use crate::types::MetadataSnapshot;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// The fetch-and-decode operation the cache memoizes.
pub type FetchFn =
    Arc<dyn Fn() -> BoxFuture<'static, Result<MetadataSnapshot, ClientError>> + Send + Sync>;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<MetadataSnapshot>, ClientError>>>;

struct Slot {
    snapshot: Arc<MetadataSnapshot>,
    fetched_at: Instant,
}

impl Slot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

#[derive(Default)]
struct State {
    slot: Option<Slot>,
    in_flight: Option<SharedFetch>,
}

struct Inner {
    ttl: Duration,
    fetch: FetchFn,
    state: Mutex<State>,
}

/// Memoizing wrapper around a fetch-and-decode operation.
pub struct MetadataCache {
    inner: Arc<Inner>,
}

impl MetadataCache {
    /// Create an empty cache. No fetch happens until the first [`get`].
    ///
    /// A zero TTL means every call refreshes, which still collapses
    /// concurrent callers onto one fetch.
    ///
    /// [`get`]: MetadataCache::get
    pub fn new(ttl: Duration, fetch: FetchFn) -> Self {
        Self {
            inner: Arc::new(Inner {
                ttl,
                fetch,
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// Return the cached snapshot, refreshing it first if it is absent or
    /// older than the TTL.
    pub async fn get(&self) -> Result<Arc<MetadataSnapshot>, ClientError> {
        let refresh = {
            let mut state = self.inner.state.lock().await;

            if let Some(slot) = &state.slot {
                if slot.is_fresh(self.inner.ttl) {
                    tracing::debug!("Metadata cache hit");
                    return Ok(slot.snapshot.clone());
                }
                tracing::debug!("Metadata cache entry expired");
            }

            match &state.in_flight {
                Some(shared) => shared.clone(),
                None => {
                    let shared = Self::start_refresh(self.inner.clone());
                    state.in_flight = Some(shared.clone());
                    shared
                }
            }
        };

        refresh.await
    }

    /// Build the shared future that performs one fetch and publishes the
    /// result. The slot and the in-flight handle are updated inside the
    /// future, under the state lock, so a reader never observes a snapshot
    /// without its timestamp.
    fn start_refresh(inner: Arc<Inner>) -> SharedFetch {
        tracing::debug!("Refreshing metric metadata");
        async move {
            let result = (inner.fetch)().await.map(Arc::new);
            let mut state = inner.state.lock().await;
            match &result {
                Ok(snapshot) => {
                    state.slot = Some(Slot {
                        snapshot: snapshot.clone(),
                        fetched_at: Instant::now(),
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Metadata refresh failed");
                }
            }
            state.in_flight = None;
            result
        }
        .boxed()
        .shared()
    }
}

impl std::fmt::Debug for MetadataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataCache")
            .field("ttl", &self.inner.ttl)
            .finish()
    }
}
