//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream API client, the memoized cache and the Axum server
//! lifecycle together from a loaded [`Config`].

use crate::config::Config;
use crate::infrastructure::cache::{CachedStats, MemoryCache, NullCache, StatsCache};
use crate::infrastructure::upstream::EnemApiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Upstream HTTP client with a request timeout
/// - In-memory TTL cache (or NullCache when the TTL is zero)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the listen address
/// does not parse, the bind fails, or the server errors at runtime.
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_seconds))
        .build()?;
    let upstream = Arc::new(EnemApiClient::new(http, config.api_base_url.clone()));

    let cache: Arc<dyn StatsCache> = if config.is_cache_enabled() {
        tracing::info!(ttl_seconds = config.cache_ttl_seconds, "Cache enabled");
        Arc::new(MemoryCache::new(Duration::from_secs(config.cache_ttl_seconds)))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let stats = Arc::new(CachedStats::new(upstream, cache.clone()));
    let state = AppState::new(stats, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
