//! Time-to-live memoization for upstream fetches.
//!
//! Provides a [`StatsCache`] trait with two implementations plus a
//! provider decorator:
//! - [`MemoryCache`] - process-wide map with TTL expiry and injectable clock
//! - [`NullCache`] - no-op implementation for disabled caching
//! - [`CachedStats`] - wraps any [`crate::domain::providers::StatsProvider`]

mod cached_provider;
mod memory_cache;
mod null_cache;
mod service;

pub use cached_provider::CachedStats;
pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::{CacheKey, CachedPayload, Clock, StatsCache, SystemClock};

#[cfg(test)]
pub(crate) use service::testing::FakeClock;
