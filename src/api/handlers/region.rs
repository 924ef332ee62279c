//! Handler for the region dashboard JSON endpoint.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::region::{DashboardQueryParams, RegionDashboardResponse};
use crate::domain::entities::{Competency, Region};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the assembled dashboard for one region as JSON.
///
/// # Endpoint
///
/// `GET /api/regioes/{regiao}`
///
/// # Query Parameters
///
/// - `competencia` (optional): competency label selecting the histogram
///   column (default: Ciências da Natureza)
///
/// # Response
///
/// The full dashboard: mean scores, histogram, essay status, demographic
/// breakdowns and absence rates. Sections with no upstream data are `null`
/// and listed under `warnings`; the endpoint itself succeeds regardless.
///
/// # Errors
///
/// Returns 400 Bad Request when the region or competency is not one of the
/// fixed enumerations.
pub async fn region_dashboard_handler(
    State(state): State<AppState>,
    Path(regiao): Path<String>,
    Query(params): Query<DashboardQueryParams>,
) -> Result<Json<RegionDashboardResponse>, AppError> {
    let region: Region = regiao.parse().map_err(|_| {
        AppError::bad_request(
            "Unknown region",
            json!({
                "regiao": regiao,
                "expected": Region::ALL.map(|r| r.as_str()),
            }),
        )
    })?;

    let competency = match params.competencia.as_deref() {
        Some(label) => label.parse::<Competency>().map_err(|_| {
            AppError::bad_request(
                "Unknown competency",
                json!({
                    "competencia": label,
                    "expected": Competency::ALL.map(|c| c.label()),
                }),
            )
        })?,
        None => Competency::CienciasNatureza,
    };

    let dashboard = state
        .region_service
        .region_dashboard(region, competency)
        .await;

    Ok(Json(dashboard.into()))
}
