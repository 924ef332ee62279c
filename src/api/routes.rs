//! API route configuration.

use crate::api::handlers::region_dashboard_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /regioes/{regiao}` - Assembled dashboard for one region
///   (`?competencia=` selects the histogram column)
pub fn routes() -> Router<AppState> {
    Router::new().route("/regioes/{regiao}", get(region_dashboard_handler))
}
