//! Provider trait for the nine upstream statistics.

use crate::domain::entities::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, EssayStatusCount, MeanScores,
    RaceCount, Region, ScoreRow, SexCount,
};
use async_trait::async_trait;

/// Source of pre-aggregated statistics, one operation per statistic.
///
/// Every operation takes the region filter and returns `Some(payload)` on
/// success or `None` when the statistic is unavailable. Failures of any kind
/// (non-success status, transport error, malformed body) are collapsed into
/// `None` by implementations and never surface to callers: a missing
/// statistic degrades to a warning widget while the rest of the page still
/// renders.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::EnemApiClient`] - HTTP client for the
///   upstream REST API
/// - [`crate::infrastructure::cache::CachedStats`] - TTL-memoizing decorator
///   over any inner provider
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Average score per competency.
    async fn mean_scores(&self, region: Region) -> Option<MeanScores>;

    /// Per-participant score rows, used for the histogram.
    async fn score_distribution(&self, region: Region) -> Option<Vec<ScoreRow>>;

    /// Essay gradings grouped by status.
    async fn essay_status(&self, region: Region) -> Option<Vec<EssayStatusCount>>;

    /// Participant counts per declared sex.
    async fn sex_distribution(&self, region: Region) -> Option<Vec<SexCount>>;

    /// Participant counts per age bracket.
    async fn age_distribution(&self, region: Region) -> Option<Vec<AgeGroupCount>>;

    /// Participant counts per declared race.
    async fn race_distribution(&self, region: Region) -> Option<Vec<RaceCount>>;

    /// Cohort size and absentees per family-income bracket.
    async fn absence_by_income(&self, region: Region) -> Option<Vec<AbsenceByIncome>>;

    /// Cohort size and absentees per age bracket.
    async fn absence_by_age(&self, region: Region) -> Option<Vec<AbsenceByAgeGroup>>;

    /// Cohort size and absentees per declared race.
    async fn absence_by_race(&self, region: Region) -> Option<Vec<AbsenceByRace>>;

    /// Whether the underlying source is reachable. Used by the health
    /// endpoint only; data operations never depend on it.
    async fn ping(&self) -> bool;
}
