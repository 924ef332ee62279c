//! Payload records returned by the upstream statistics API.
//!
//! Field names mirror the upstream JSON exactly; every record is immutable
//! once decoded and only ever consumed read-only by the view layer.

use serde::{Deserialize, Serialize};

/// Average score per competency for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanScores {
    pub media_cn: f64,
    pub media_ch: f64,
    pub media_lc: f64,
    pub media_mt: f64,
    pub media_redacao: f64,
}

/// One participant's scores. Absentees have no score in the corresponding
/// column, so every field is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub nota_cn: Option<f64>,
    pub nota_ch: Option<f64>,
    pub nota_lc: Option<f64>,
    pub nota_mt: Option<f64>,
    pub nota_redacao: Option<f64>,
}

impl ScoreRow {
    /// The score for the given competency field, if the participant has one.
    pub fn score(&self, score_field: &str) -> Option<f64> {
        match score_field {
            "nota_cn" => self.nota_cn,
            "nota_ch" => self.nota_ch,
            "nota_lc" => self.nota_lc,
            "nota_mt" => self.nota_mt,
            "nota_redacao" => self.nota_redacao,
            _ => None,
        }
    }
}

/// Essay gradings grouped by status (approved, blank, annulled, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayStatusCount {
    pub status: String,
    pub total: i64,
}

/// Participant count per declared sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexCount {
    pub sexo: String,
    pub total: i64,
}

/// Participant count per age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupCount {
    pub faixa_etaria: String,
    pub total: i64,
}

/// Participant count per declared race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceCount {
    pub raca: String,
    pub total: i64,
}

/// Cohort size and absentee count per family-income bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceByIncome {
    pub renda: String,
    pub total: i64,
    pub ausentes: i64,
}

/// Cohort size and absentee count per age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceByAgeGroup {
    pub faixa_etaria: String,
    pub total: i64,
    pub ausentes: i64,
}

/// Cohort size and absentee count per declared race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceByRace {
    pub raca: String,
    pub total: i64,
    pub ausentes: i64,
}
