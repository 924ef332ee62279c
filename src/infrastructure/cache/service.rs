//! Cache trait, key and clock types for fetch memoization.

use crate::domain::Statistic;
use crate::domain::entities::Region;
use std::time::Instant;

/// Cache key: one entry per (statistic, region) pair.
///
/// The key space is bounded by the two enumerations, so the cache holds at
/// most a few dozen entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub statistic: Statistic,
    pub region: Region,
}

impl CacheKey {
    pub fn new(statistic: Statistic, region: Region) -> Self {
        Self { statistic, region }
    }
}

/// A memoized fetch outcome.
///
/// `None` records that the upstream returned no data: the sentinel is cached
/// for the TTL just like a payload, so a flaky endpoint is not hammered on
/// every render.
pub type CachedPayload = Option<serde_json::Value>;

/// Time source for expiry decisions.
///
/// Production uses [`SystemClock`]; tests inject a fake clock to drive TTL
/// expiry deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Trait for memoizing fetch outcomes with a fixed time-to-live.
///
/// Implementations must be safe under concurrent renders from different
/// sessions. Overwrites are idempotent: recomputing the same key yields an
/// equivalent value, so a racing double-fetch degrades to duplicate work,
/// never to corruption.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - process-wide map with TTL expiry
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
pub trait StatsCache: Send + Sync {
    /// Returns the memoized outcome for a key, or `None` when the key is
    /// absent or its entry has expired.
    fn get(&self, key: &CacheKey) -> Option<CachedPayload>;

    /// Stores a fetch outcome, resetting the key's TTL.
    fn put(&self, key: CacheKey, payload: CachedPayload);

    /// Number of live (unexpired) entries. Reported by the health endpoint.
    fn entry_count(&self) -> usize;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Clock;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Clock that only moves when told to.
    pub(crate) struct FakeClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl FakeClock {
        pub(crate) fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }
}
