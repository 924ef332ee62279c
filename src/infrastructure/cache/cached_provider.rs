//! TTL-memoizing decorator over a [`StatsProvider`].

use super::service::{CacheKey, StatsCache};
use crate::domain::Statistic;
use crate::domain::entities::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, EssayStatusCount, MeanScores,
    RaceCount, Region, ScoreRow, SexCount,
};
use crate::domain::providers::StatsProvider;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

/// Wraps a provider so repeated fetches of the same (statistic, region)
/// within the TTL skip the network round-trip.
///
/// Payloads are stored as JSON values; the "no data" sentinel is memoized
/// too. `ping` is never cached.
pub struct CachedStats {
    inner: Arc<dyn StatsProvider>,
    cache: Arc<dyn StatsCache>,
}

impl CachedStats {
    pub fn new(inner: Arc<dyn StatsProvider>, cache: Arc<dyn StatsCache>) -> Self {
        Self { inner, cache }
    }

    async fn get_or_fetch<T, Fut>(
        &self,
        statistic: Statistic,
        region: Region,
        fetch: impl FnOnce() -> Fut,
    ) -> Option<T>
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Option<T>> + Send,
    {
        let key = CacheKey::new(statistic, region);

        match self.cache.get(&key) {
            // Memoized no-data outcome.
            Some(None) => return None,
            Some(Some(value)) => match serde_json::from_value(value) {
                Ok(decoded) => return Some(decoded),
                Err(e) => {
                    warn!(statistic = %statistic, region = %region, "undecodable cache entry, refetching: {e}");
                }
            },
            None => {}
        }

        let fetched = fetch().await;
        match &fetched {
            None => self.cache.put(key, None),
            Some(payload) => match serde_json::to_value(payload) {
                Ok(value) => self.cache.put(key, Some(value)),
                Err(e) => {
                    warn!(statistic = %statistic, region = %region, "payload not cacheable: {e}");
                }
            },
        }
        fetched
    }
}

#[async_trait]
impl StatsProvider for CachedStats {
    async fn mean_scores(&self, region: Region) -> Option<MeanScores> {
        self.get_or_fetch(Statistic::MeanScores, region, || {
            self.inner.mean_scores(region)
        })
        .await
    }

    async fn score_distribution(&self, region: Region) -> Option<Vec<ScoreRow>> {
        self.get_or_fetch(Statistic::ScoreDistribution, region, || {
            self.inner.score_distribution(region)
        })
        .await
    }

    async fn essay_status(&self, region: Region) -> Option<Vec<EssayStatusCount>> {
        self.get_or_fetch(Statistic::EssayStatus, region, || {
            self.inner.essay_status(region)
        })
        .await
    }

    async fn sex_distribution(&self, region: Region) -> Option<Vec<SexCount>> {
        self.get_or_fetch(Statistic::SexDistribution, region, || {
            self.inner.sex_distribution(region)
        })
        .await
    }

    async fn age_distribution(&self, region: Region) -> Option<Vec<AgeGroupCount>> {
        self.get_or_fetch(Statistic::AgeDistribution, region, || {
            self.inner.age_distribution(region)
        })
        .await
    }

    async fn race_distribution(&self, region: Region) -> Option<Vec<RaceCount>> {
        self.get_or_fetch(Statistic::RaceDistribution, region, || {
            self.inner.race_distribution(region)
        })
        .await
    }

    async fn absence_by_income(&self, region: Region) -> Option<Vec<AbsenceByIncome>> {
        self.get_or_fetch(Statistic::AbsenceByIncome, region, || {
            self.inner.absence_by_income(region)
        })
        .await
    }

    async fn absence_by_age(&self, region: Region) -> Option<Vec<AbsenceByAgeGroup>> {
        self.get_or_fetch(Statistic::AbsenceByAge, region, || {
            self.inner.absence_by_age(region)
        })
        .await
    }

    async fn absence_by_race(&self, region: Region) -> Option<Vec<AbsenceByRace>> {
        self.get_or_fetch(Statistic::AbsenceByRace, region, || {
            self.inner.absence_by_race(region)
        })
        .await
    }

    async fn ping(&self) -> bool {
        self.inner.ping().await
    }
}
