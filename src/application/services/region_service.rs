//! Region dashboard assembly service.

use std::sync::Arc;

use crate::application::views::{
    self, HISTOGRAM_BINS, RegionDashboard, score_histogram, sort_essay_status, sort_race_counts,
};
use crate::domain::Statistic;
use crate::domain::entities::{Competency, Region};
use crate::domain::providers::StatsProvider;

/// Service for assembling the region-analysis dashboard.
///
/// One render pass is a pure function of (region, competency): the nine
/// statistics are fetched sequentially in a fixed order, then reshaped into
/// a [`RegionDashboard`]. Nothing persists between passes; a new selection
/// always re-fetches (through the caching decorator) rather than patching
/// any prior result.
pub struct RegionStatsService {
    provider: Arc<dyn StatsProvider>,
}

impl RegionStatsService {
    /// Creates a new dashboard service on top of any statistics provider.
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }

    /// Runs a full render pass for the given selection.
    ///
    /// An empty array payload counts as no data, the same as a failed
    /// fetch. Sections without data come back `None` with the statistic's
    /// key recorded in `warnings`; the pass itself never fails.
    pub async fn region_dashboard(
        &self,
        region: Region,
        competency: Competency,
    ) -> RegionDashboard {
        let mean_scores = self.provider.mean_scores(region).await;
        let distribution = non_empty(self.provider.score_distribution(region).await);
        let essay_status = non_empty(self.provider.essay_status(region).await);
        let sex = non_empty(self.provider.sex_distribution(region).await);
        let age_groups = non_empty(self.provider.age_distribution(region).await);
        let races = non_empty(self.provider.race_distribution(region).await);
        let absence_income = non_empty(self.provider.absence_by_income(region).await);
        let absence_age = non_empty(self.provider.absence_by_age(region).await);
        let absence_race = non_empty(self.provider.absence_by_race(region).await);

        // A distribution where no participant has a score in the selected
        // column has nothing to plot either.
        let histogram = distribution
            .as_deref()
            .and_then(|rows| score_histogram(rows, competency, HISTOGRAM_BINS));

        let mut warnings = Vec::new();
        let mut note_missing = |statistic: Statistic, present: bool| {
            if !present {
                warnings.push(statistic.key().to_string());
            }
        };
        note_missing(Statistic::MeanScores, mean_scores.is_some());
        note_missing(Statistic::ScoreDistribution, histogram.is_some());
        note_missing(Statistic::EssayStatus, essay_status.is_some());
        note_missing(Statistic::SexDistribution, sex.is_some());
        note_missing(Statistic::AgeDistribution, age_groups.is_some());
        note_missing(Statistic::RaceDistribution, races.is_some());
        note_missing(Statistic::AbsenceByIncome, absence_income.is_some());
        note_missing(Statistic::AbsenceByAge, absence_age.is_some());
        note_missing(Statistic::AbsenceByRace, absence_race.is_some());

        RegionDashboard {
            region,
            competency,
            mean_scores,
            histogram,
            essay_status: essay_status.map(sort_essay_status),
            sex,
            age_groups,
            races: races.map(sort_race_counts),
            absence_by_income: absence_income.as_deref().map(views::absence_rates),
            absence_by_age: absence_age.as_deref().map(views::absence_rates),
            absence_by_race: absence_race.as_deref().map(views::absence_rates),
            warnings,
        }
    }
}

/// Collapses empty array payloads into the no-data sentinel.
fn non_empty<T>(payload: Option<Vec<T>>) -> Option<Vec<T>> {
    payload.filter(|rows| !rows.is_empty())
}
