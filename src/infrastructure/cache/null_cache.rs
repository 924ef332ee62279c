//! No-op cache implementation.

use super::service::{CacheKey, CachedPayload, StatsCache};

/// Cache that never stores anything.
///
/// Used when caching is disabled (`CACHE_TTL_SECONDS=0`) and in tests that
/// must observe every upstream call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

impl StatsCache for NullCache {
    fn get(&self, _key: &CacheKey) -> Option<CachedPayload> {
        None
    }

    fn put(&self, _key: CacheKey, _payload: CachedPayload) {}

    fn entry_count(&self) -> usize {
        0
    }
}
