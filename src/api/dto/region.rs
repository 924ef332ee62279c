//! Region dashboard response DTOs.

use crate::application::views::{AbsenceRateRow, Histogram, RegionDashboard};
use crate::domain::entities::{
    AgeGroupCount, Competency, EssayStatusCount, MeanScores, RaceCount, Region, SexCount,
};
use serde::{Deserialize, Serialize};

/// Query parameters for the dashboard endpoints.
#[derive(Debug, Deserialize)]
pub struct DashboardQueryParams {
    /// Competency label (defaults to Ciências da Natureza when absent).
    pub competencia: Option<String>,
}

/// The full dashboard for one (region, competency) selection.
///
/// Sections are `null` when the upstream produced no data; their statistic
/// keys are listed in `warnings` so clients can render fallbacks.
#[derive(Debug, Serialize)]
pub struct RegionDashboardResponse {
    pub region: Region,
    pub competency: Competency,
    pub mean_scores: Option<MeanScores>,
    pub histogram: Option<Histogram>,
    pub essay_status: Option<Vec<EssayStatusCount>>,
    /// Whether the essay-status section applies to this selection.
    pub shows_essay_status: bool,
    pub sex: Option<Vec<SexCount>>,
    pub age_groups: Option<Vec<AgeGroupCount>>,
    pub races: Option<Vec<RaceCount>>,
    pub absence_by_income: Option<Vec<AbsenceRateRow>>,
    pub absence_by_age: Option<Vec<AbsenceRateRow>>,
    pub absence_by_race: Option<Vec<AbsenceRateRow>>,
    pub warnings: Vec<String>,
}

impl From<RegionDashboard> for RegionDashboardResponse {
    fn from(dashboard: RegionDashboard) -> Self {
        let shows_essay_status = dashboard.shows_essay_status();
        Self {
            region: dashboard.region,
            competency: dashboard.competency,
            mean_scores: dashboard.mean_scores,
            histogram: dashboard.histogram,
            essay_status: dashboard.essay_status,
            shows_essay_status,
            sex: dashboard.sex,
            age_groups: dashboard.age_groups,
            races: dashboard.races,
            absence_by_income: dashboard.absence_by_income,
            absence_by_age: dashboard.absence_by_age,
            absence_by_race: dashboard.absence_by_race,
            warnings: dashboard.warnings,
        }
    }
}
