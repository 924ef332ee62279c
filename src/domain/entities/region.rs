//! Region filter entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic filter for every statistic: the whole country or one of the
/// five macro-regions.
///
/// Serializes to the exact identifiers the upstream API uses in its path
/// templates (`Brasil`, `Norte`, `Nordeste`, `Centro-Oeste`, `Sudeste`,
/// `Sul`), so the same value drives both the UI selector and the request
/// URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Brasil,
    Norte,
    Nordeste,
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
    Sudeste,
    Sul,
}

impl Region {
    /// All regions in selector display order.
    pub const ALL: [Region; 6] = [
        Region::Brasil,
        Region::Norte,
        Region::Nordeste,
        Region::CentroOeste,
        Region::Sudeste,
        Region::Sul,
    ];

    /// The identifier substituted into upstream path templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Brasil => "Brasil",
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::CentroOeste => "Centro-Oeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}
