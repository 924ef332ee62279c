//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Upstream API unreachable
///
/// # Components Checked
///
/// 1. **Upstream**: Probes the statistics API base URL
/// 2. **Cache**: Reports live memoized entries
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upstream_check = check_upstream(&state).await;
    let cache_check = check_cache(&state);

    let all_healthy = upstream_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream: upstream_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks upstream API reachability.
async fn check_upstream(state: &AppState) -> CheckStatus {
    if state.stats.ping().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Upstream API reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Upstream API unreachable".to_string()),
        }
    }
}

/// Reports fetch cache occupancy.
fn check_cache(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Entries: {}", state.cache.entry_count())),
    }
}
