#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use enem_dashboard::domain::entities::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, EssayStatusCount, MeanScores,
    RaceCount, Region, ScoreRow, SexCount,
};
use enem_dashboard::domain::providers::StatsProvider;
use enem_dashboard::infrastructure::cache::NullCache;
use enem_dashboard::state::AppState;

/// Provider serving canned payloads, with per-statistic outage toggles.
///
/// Statistics listed in `missing` return `None`, mimicking an upstream that
/// has no data (or failed) for that endpoint.
pub struct FixtureProvider {
    missing: HashSet<&'static str>,
    reachable: bool,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self {
            missing: HashSet::new(),
            reachable: true,
        }
    }

    /// Marks one statistic key as unavailable.
    pub fn without(mut self, key: &'static str) -> Self {
        self.missing.insert(key);
        self
    }

    /// Makes the health ping fail.
    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    fn available(&self, key: &str) -> bool {
        !self.missing.contains(key)
    }
}

#[async_trait]
impl StatsProvider for FixtureProvider {
    async fn mean_scores(&self, _region: Region) -> Option<MeanScores> {
        self.available("medias").then(|| MeanScores {
            media_cn: 495.7,
            media_ch: 528.0,
            media_lc: 517.3,
            media_mt: 542.8,
            media_redacao: 632.0,
        })
    }

    async fn score_distribution(&self, _region: Region) -> Option<Vec<ScoreRow>> {
        self.available("distribuicao").then(|| {
            vec![
                row(Some(480.0), Some(510.0), Some(500.0), Some(530.0), Some(600.0)),
                row(Some(520.0), Some(495.0), Some(505.0), Some(610.0), Some(640.0)),
                // absentee
                row(None, None, None, None, None),
                row(Some(455.5), Some(540.0), Some(512.0), Some(488.0), Some(700.0)),
            ]
        })
    }

    async fn essay_status(&self, _region: Region) -> Option<Vec<EssayStatusCount>> {
        self.available("status_redacao").then(|| {
            vec![
                EssayStatusCount {
                    status: "Sem problemas".to_string(),
                    total: 900,
                },
                EssayStatusCount {
                    status: "Anulada".to_string(),
                    total: 10,
                },
                EssayStatusCount {
                    status: "Em branco".to_string(),
                    total: 40,
                },
            ]
        })
    }

    async fn sex_distribution(&self, _region: Region) -> Option<Vec<SexCount>> {
        self.available("distribuicao_sexo").then(|| {
            vec![
                SexCount {
                    sexo: "F".to_string(),
                    total: 60,
                },
                SexCount {
                    sexo: "M".to_string(),
                    total: 40,
                },
            ]
        })
    }

    async fn age_distribution(&self, _region: Region) -> Option<Vec<AgeGroupCount>> {
        self.available("distribuicao_faixa_etaria").then(|| {
            vec![
                AgeGroupCount {
                    faixa_etaria: "Menor de 17 anos".to_string(),
                    total: 15,
                },
                AgeGroupCount {
                    faixa_etaria: "17 a 20 anos".to_string(),
                    total: 70,
                },
            ]
        })
    }

    async fn race_distribution(&self, _region: Region) -> Option<Vec<RaceCount>> {
        self.available("distribuicao_raca").then(|| {
            vec![
                RaceCount {
                    raca: "Parda".to_string(),
                    total: 45,
                },
                RaceCount {
                    raca: "Branca".to_string(),
                    total: 40,
                },
                RaceCount {
                    raca: "Preta".to_string(),
                    total: 12,
                },
            ]
        })
    }

    async fn absence_by_income(&self, _region: Region) -> Option<Vec<AbsenceByIncome>> {
        self.available("ausencia_renda").then(|| {
            vec![
                AbsenceByIncome {
                    renda: "Até 1 salário mínimo".to_string(),
                    total: 200,
                    ausentes: 50,
                },
                // zero cohort, must be excluded from rates
                AbsenceByIncome {
                    renda: "Nenhuma renda".to_string(),
                    total: 0,
                    ausentes: 0,
                },
                AbsenceByIncome {
                    renda: "Mais de 1 salário mínimo".to_string(),
                    total: 100,
                    ausentes: 10,
                },
            ]
        })
    }

    async fn absence_by_age(&self, _region: Region) -> Option<Vec<AbsenceByAgeGroup>> {
        self.available("ausencia_faixa_etaria").then(|| {
            vec![
                AbsenceByAgeGroup {
                    faixa_etaria: "17 a 20 anos".to_string(),
                    total: 400,
                    ausentes: 80,
                },
                AbsenceByAgeGroup {
                    faixa_etaria: "21 a 30 anos".to_string(),
                    total: 250,
                    ausentes: 100,
                },
            ]
        })
    }

    async fn absence_by_race(&self, _region: Region) -> Option<Vec<AbsenceByRace>> {
        self.available("ausencia_raca").then(|| {
            vec![
                AbsenceByRace {
                    raca: "Parda".to_string(),
                    total: 200,
                    ausentes: 50,
                },
                AbsenceByRace {
                    raca: "Branca".to_string(),
                    total: 100,
                    ausentes: 10,
                },
                AbsenceByRace {
                    raca: "Preta".to_string(),
                    total: 100,
                    ausentes: 40,
                },
            ]
        })
    }

    async fn ping(&self) -> bool {
        self.reachable
    }
}

fn row(
    nota_cn: Option<f64>,
    nota_ch: Option<f64>,
    nota_lc: Option<f64>,
    nota_mt: Option<f64>,
    nota_redacao: Option<f64>,
) -> ScoreRow {
    ScoreRow {
        nota_cn,
        nota_ch,
        nota_lc,
        nota_mt,
        nota_redacao,
    }
}

/// Builds shared state over the given provider, caching disabled.
pub fn create_test_state(provider: FixtureProvider) -> AppState {
    AppState::new(Arc::new(provider), Arc::new(NullCache::new()))
}
