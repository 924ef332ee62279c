//! View models and payload reshaping for the region dashboard.
//!
//! Everything here is pure: payloads in, display-ready tables out. Derived
//! columns (absence percentages), display sorts and histogram binning all
//! live in this module so they can be tested without any I/O.

use crate::domain::entities::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, Competency, EssayStatusCount,
    MeanScores, RaceCount, Region, ScoreRow, SexCount,
};
use serde::Serialize;

/// Number of bins in the score distribution histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// One category's absence rate.
///
/// `pct` is `absentees / total * 100`. Rows with `total == 0` are never
/// constructed: the rate is undefined there, so the category is excluded
/// from the chart instead of plotting an infinity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsenceRateRow {
    pub category: String,
    pub total: i64,
    pub absentees: i64,
    pub pct: f64,
}

/// A record carrying a cohort size and an absentee count for one category.
pub trait AbsenceRecord {
    fn category(&self) -> &str;
    fn total(&self) -> i64;
    fn absentees(&self) -> i64;
}

impl AbsenceRecord for AbsenceByIncome {
    fn category(&self) -> &str {
        &self.renda
    }
    fn total(&self) -> i64 {
        self.total
    }
    fn absentees(&self) -> i64 {
        self.ausentes
    }
}

impl AbsenceRecord for AbsenceByAgeGroup {
    fn category(&self) -> &str {
        &self.faixa_etaria
    }
    fn total(&self) -> i64 {
        self.total
    }
    fn absentees(&self) -> i64 {
        self.ausentes
    }
}

impl AbsenceRecord for AbsenceByRace {
    fn category(&self) -> &str {
        &self.raca
    }
    fn total(&self) -> i64 {
        self.total
    }
    fn absentees(&self) -> i64 {
        self.ausentes
    }
}

/// Derives absence rates and sorts them descending, highest rate first.
///
/// Zero-total categories are dropped (undefined rate, no plotted point).
pub fn absence_rates<R: AbsenceRecord>(rows: &[R]) -> Vec<AbsenceRateRow> {
    let mut rates: Vec<AbsenceRateRow> = rows
        .iter()
        .filter(|row| row.total() != 0)
        .map(|row| AbsenceRateRow {
            category: row.category().to_string(),
            total: row.total(),
            absentees: row.absentees(),
            pct: row.absentees() as f64 / row.total() as f64 * 100.0,
        })
        .collect();
    rates.sort_by(|a, b| b.pct.total_cmp(&a.pct));
    rates
}

/// One histogram bin over a score interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

impl HistogramBin {
    /// Bin midpoint, used as the bar position.
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Equal-width histogram of one competency's scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// Bins the selected competency's scores into `nbins` equal-width buckets,
/// skipping participants without a score in that column.
///
/// Returns `None` when no participant has a score (nothing to plot).
pub fn score_histogram(rows: &[ScoreRow], competency: Competency, nbins: usize) -> Option<Histogram> {
    let field = competency.score_field();
    let scores: Vec<f64> = rows.iter().filter_map(|row| row.score(field)).collect();
    if scores.is_empty() || nbins == 0 {
        return None;
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate distribution: everything lands in one bin.
    if min == max {
        return Some(Histogram {
            bins: vec![HistogramBin {
                start: min,
                end: max,
                count: scores.len() as u64,
            }],
        });
    }

    let width = (max - min) / nbins as f64;
    let mut counts = vec![0u64; nbins];
    for score in &scores {
        let index = (((score - min) / width) as usize).min(nbins - 1);
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count,
        })
        .collect();

    Some(Histogram { bins })
}

/// Sorts essay-status rows ascending by total, so the largest horizontal
/// bar renders at the top.
pub fn sort_essay_status(mut rows: Vec<EssayStatusCount>) -> Vec<EssayStatusCount> {
    rows.sort_by_key(|row| row.total);
    rows
}

/// Sorts race counts ascending by total.
pub fn sort_race_counts(mut rows: Vec<RaceCount>) -> Vec<RaceCount> {
    rows.sort_by_key(|row| row.total);
    rows
}

/// The assembled dashboard for one (region, competency) selection.
///
/// Every section is independently optional: a missing payload leaves its
/// section `None` and adds the statistic's key to `warnings`; no failure
/// aborts the page.
#[derive(Debug, Clone, Serialize)]
pub struct RegionDashboard {
    pub region: Region,
    pub competency: Competency,
    pub mean_scores: Option<MeanScores>,
    pub histogram: Option<Histogram>,
    pub essay_status: Option<Vec<EssayStatusCount>>,
    pub sex: Option<Vec<SexCount>>,
    pub age_groups: Option<Vec<AgeGroupCount>>,
    pub races: Option<Vec<RaceCount>>,
    pub absence_by_income: Option<Vec<AbsenceRateRow>>,
    pub absence_by_age: Option<Vec<AbsenceRateRow>>,
    pub absence_by_race: Option<Vec<AbsenceRateRow>>,
    /// Keys of the statistics that produced no data this pass.
    pub warnings: Vec<String>,
}

impl RegionDashboard {
    /// Whether the essay-status section applies to this selection. It is
    /// shown only for Redação outside the nationwide view.
    pub fn shows_essay_status(&self) -> bool {
        self.competency == Competency::Redacao && self.region != Region::Brasil
    }
}
