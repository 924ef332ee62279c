//! HTTP client for the upstream statistics API.

use crate::domain::Statistic;
use crate::domain::entities::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, EssayStatusCount, MeanScores,
    RaceCount, Region, ScoreRow, SexCount,
};
use crate::domain::providers::StatsProvider;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for the nine region-statistics endpoints.
///
/// One idempotent GET per call, no retries, no backoff. Every failure mode
/// (transport error, non-success status, malformed JSON) collapses into the
/// no-data sentinel: a flaky endpoint degrades one widget, never the page.
pub struct EnemApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl EnemApiClient {
    /// Creates a client for the given base URL. A trailing slash on the
    /// base URL is tolerated.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    async fn fetch<T: DeserializeOwned>(&self, statistic: Statistic, region: Region) -> Option<T> {
        let url = format!("{}{}", self.base_url, statistic.path(region));

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(statistic = %statistic, region = %region, "upstream request failed: {e}");
                metrics::counter!("upstream_failures_total").increment(1);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(statistic = %statistic, region = %region, %status, "upstream returned no data");
            metrics::counter!("upstream_no_data_total").increment(1);
            return None;
        }

        match response.json::<T>().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(statistic = %statistic, region = %region, "malformed upstream payload: {e}");
                metrics::counter!("upstream_failures_total").increment(1);
                None
            }
        }
    }
}

#[async_trait]
impl StatsProvider for EnemApiClient {
    async fn mean_scores(&self, region: Region) -> Option<MeanScores> {
        self.fetch(Statistic::MeanScores, region).await
    }

    async fn score_distribution(&self, region: Region) -> Option<Vec<ScoreRow>> {
        self.fetch(Statistic::ScoreDistribution, region).await
    }

    async fn essay_status(&self, region: Region) -> Option<Vec<EssayStatusCount>> {
        self.fetch(Statistic::EssayStatus, region).await
    }

    async fn sex_distribution(&self, region: Region) -> Option<Vec<SexCount>> {
        self.fetch(Statistic::SexDistribution, region).await
    }

    async fn age_distribution(&self, region: Region) -> Option<Vec<AgeGroupCount>> {
        self.fetch(Statistic::AgeDistribution, region).await
    }

    async fn race_distribution(&self, region: Region) -> Option<Vec<RaceCount>> {
        self.fetch(Statistic::RaceDistribution, region).await
    }

    async fn absence_by_income(&self, region: Region) -> Option<Vec<AbsenceByIncome>> {
        self.fetch(Statistic::AbsenceByIncome, region).await
    }

    async fn absence_by_age(&self, region: Region) -> Option<Vec<AbsenceByAgeGroup>> {
        self.fetch(Statistic::AbsenceByAge, region).await
    }

    async fn absence_by_race(&self, region: Region) -> Option<Vec<AbsenceByRace>> {
        self.fetch(Statistic::AbsenceByRace, region).await
    }

    async fn ping(&self) -> bool {
        // Any response at all counts as reachable; the root path is not
        // required to exist.
        self.http.get(&self.base_url).send().await.is_ok()
    }
}
