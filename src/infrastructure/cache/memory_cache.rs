//! Process-wide in-memory cache with time-to-live expiry.

use super::service::{CacheKey, CachedPayload, Clock, StatsCache, SystemClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;

struct Entry {
    payload: CachedPayload,
    inserted_at: Instant,
}

/// In-memory TTL cache shared by all sessions of the process.
///
/// Entries expire a fixed duration after insertion; there is no explicit
/// invalidation path, staleness is bounded purely by the TTL. Expired
/// entries are dropped lazily: reads treat them as misses and writes sweep
/// them out.
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, Entry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates a cache with the given TTL and the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a cache with an injected clock. Tests use this to advance
    /// time without sleeping.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.inserted_at) >= self.ttl
    }
}

impl StatsCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<CachedPayload> {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());

        match entries.get(key) {
            Some(entry) if !self.is_expired(entry, now) => {
                debug!(statistic = %key.statistic, region = %key.region, "cache hit");
                metrics::counter!("stats_cache_hits_total").increment(1);
                Some(entry.payload.clone())
            }
            Some(_) => {
                debug!(statistic = %key.statistic, region = %key.region, "cache entry expired");
                metrics::counter!("stats_cache_misses_total").increment(1);
                None
            }
            None => {
                metrics::counter!("stats_cache_misses_total").increment(1);
                None
            }
        }
    }

    fn put(&self, key: CacheKey, payload: CachedPayload) {
        let now = self.clock.now();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());

        entries.retain(|_, entry| !self.is_expired(entry, now));
        entries.insert(
            key,
            Entry {
                payload,
                inserted_at: now,
            },
        );
    }

    fn entry_count(&self) -> usize {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .values()
            .filter(|entry| !self.is_expired(entry, now))
            .count()
    }
}
