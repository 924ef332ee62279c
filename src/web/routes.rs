//! Dashboard page route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, regions_handler};
use axum::{Router, routing::get};

/// Browser-facing dashboard routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the project overview
/// - `GET /regioes` - Region analysis page with selectors and charts
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/regioes", get(regions_handler))
}
