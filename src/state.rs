//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::RegionStatsService;
use crate::domain::providers::StatsProvider;
use crate::infrastructure::cache::StatsCache;

/// State shared across all requests.
///
/// `stats` is the (possibly cache-wrapped) provider; the health endpoint
/// pings it and the cache directly, while page and API handlers go through
/// `region_service`.
#[derive(Clone)]
pub struct AppState {
    pub region_service: Arc<RegionStatsService>,
    pub stats: Arc<dyn StatsProvider>,
    pub cache: Arc<dyn StatsCache>,
}

impl AppState {
    pub fn new(stats: Arc<dyn StatsProvider>, cache: Arc<dyn StatsCache>) -> Self {
        Self {
            region_service: Arc::new(RegionStatsService::new(stats.clone())),
            stats,
            cache,
        }
    }
}
