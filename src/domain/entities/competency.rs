//! Exam competency (subject area) entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five exam subject areas.
///
/// Each competency maps to the score column of the per-participant
/// distribution payload, used when building the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competency {
    #[serde(rename = "Ciências da Natureza")]
    CienciasNatureza,
    #[serde(rename = "Ciências Humanas")]
    CienciasHumanas,
    #[serde(rename = "Linguagens e Códigos")]
    LinguagensCodigos,
    #[serde(rename = "Matemática")]
    Matematica,
    #[serde(rename = "Redação")]
    Redacao,
}

impl Competency {
    /// All competencies in selector display order.
    pub const ALL: [Competency; 5] = [
        Competency::CienciasNatureza,
        Competency::CienciasHumanas,
        Competency::LinguagensCodigos,
        Competency::Matematica,
        Competency::Redacao,
    ];

    /// Human-readable label shown in the selector and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Competency::CienciasNatureza => "Ciências da Natureza",
            Competency::CienciasHumanas => "Ciências Humanas",
            Competency::LinguagensCodigos => "Linguagens e Códigos",
            Competency::Matematica => "Matemática",
            Competency::Redacao => "Redação",
        }
    }

    /// Name of the score field in the distribution payload.
    pub fn score_field(&self) -> &'static str {
        match self {
            Competency::CienciasNatureza => "nota_cn",
            Competency::CienciasHumanas => "nota_ch",
            Competency::LinguagensCodigos => "nota_lc",
            Competency::Matematica => "nota_mt",
            Competency::Redacao => "nota_redacao",
        }
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Competency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Competency::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown competency: {s}"))
    }
}
