//! Region analysis page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::json;

use crate::application::views::RegionDashboard;
use crate::domain::entities::{Competency, Region};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::charts;

/// Query parameters of the region analysis page. Both selectors submit the
/// same GET form; absent values fall back to the page defaults.
#[derive(Debug, Deserialize)]
pub struct RegionsPageQuery {
    pub regiao: Option<String>,
    pub competencia: Option<String>,
}

/// One entry of a `<select>` control.
pub struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

/// One mean-score metric card.
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

/// Template for the region analysis page.
///
/// Chart fields carry serialized Plotly figures; a `None` renders the
/// section's warning fallback instead.
#[derive(Template, WebTemplate)]
#[template(path = "regions.html")]
pub struct RegionsTemplate {
    pub region_label: &'static str,
    pub competency_label: &'static str,
    pub region_options: Vec<SelectOption>,
    pub competency_options: Vec<SelectOption>,
    pub metrics: Option<Vec<MetricCard>>,
    pub histogram: Option<String>,
    pub show_essay: bool,
    pub essay: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub race: Option<String>,
    pub absence_income: Option<String>,
    pub absence_age: Option<String>,
    pub absence_race: Option<String>,
}

/// Renders the region analysis dashboard page.
///
/// # Endpoint
///
/// `GET /regioes?regiao=X&competencia=Y`
///
/// A selection change re-submits the form and re-runs the full
/// fetch-and-render pass; there is no partial update.
///
/// # Errors
///
/// Returns 400 Bad Request when a submitted selection is outside the fixed
/// option sets.
pub async fn regions_handler(
    State(state): State<AppState>,
    Query(params): Query<RegionsPageQuery>,
) -> Result<RegionsTemplate, AppError> {
    let region = match params.regiao.as_deref() {
        Some(value) => value.parse::<Region>().map_err(|_| {
            AppError::bad_request("Unknown region", json!({ "regiao": value }))
        })?,
        None => Region::Brasil,
    };
    let competency = match params.competencia.as_deref() {
        Some(value) => value.parse::<Competency>().map_err(|_| {
            AppError::bad_request("Unknown competency", json!({ "competencia": value }))
        })?,
        None => Competency::CienciasNatureza,
    };

    let dashboard = state
        .region_service
        .region_dashboard(region, competency)
        .await;

    Ok(render_template(dashboard))
}

fn render_template(dashboard: RegionDashboard) -> RegionsTemplate {
    let show_essay = dashboard.shows_essay_status();
    let competency_label = dashboard.competency.label();

    let metrics = dashboard.mean_scores.as_ref().map(|means| {
        vec![
            MetricCard {
                label: "Ciências da Natureza",
                value: format!("{:.1}", means.media_cn),
            },
            MetricCard {
                label: "Ciências Humanas",
                value: format!("{:.1}", means.media_ch),
            },
            MetricCard {
                label: "Linguagens e Códigos",
                value: format!("{:.1}", means.media_lc),
            },
            MetricCard {
                label: "Matemática",
                value: format!("{:.1}", means.media_mt),
            },
            MetricCard {
                label: "Redação",
                value: format!("{:.1}", means.media_redacao),
            },
        ]
    });

    RegionsTemplate {
        region_label: dashboard.region.as_str(),
        competency_label,
        region_options: Region::ALL
            .iter()
            .map(|r| SelectOption {
                value: r.as_str(),
                selected: *r == dashboard.region,
            })
            .collect(),
        competency_options: Competency::ALL
            .iter()
            .map(|c| SelectOption {
                value: c.label(),
                selected: *c == dashboard.competency,
            })
            .collect(),
        metrics,
        histogram: dashboard
            .histogram
            .as_ref()
            .map(|h| charts::histogram_figure(h, competency_label).to_string()),
        show_essay,
        essay: dashboard
            .essay_status
            .as_deref()
            .map(|rows| charts::essay_status_figure(rows).to_string()),
        sex: dashboard
            .sex
            .as_deref()
            .map(|rows| charts::sex_pie_figure(rows).to_string()),
        age: dashboard
            .age_groups
            .as_deref()
            .map(|rows| charts::age_bar_figure(rows).to_string()),
        race: dashboard
            .races
            .as_deref()
            .map(|rows| charts::race_bar_figure(rows).to_string()),
        absence_income: dashboard
            .absence_by_income
            .as_deref()
            .map(|rows| charts::absence_income_figure(rows).to_string()),
        absence_age: dashboard
            .absence_by_age
            .as_deref()
            .map(|rows| charts::absence_age_figure(rows).to_string()),
        absence_race: dashboard
            .absence_by_race
            .as_deref()
            .map(|rows| charts::absence_race_figure(rows).to_string()),
    }
}
