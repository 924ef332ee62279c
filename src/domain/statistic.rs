//! The fixed set of statistics the dashboard fetches.

use crate::domain::entities::Region;
use std::fmt;

/// One of the nine pre-aggregated statistics served by the upstream API.
///
/// Each statistic has a stable key (cache keys, warning identifiers) and a
/// fixed path template keyed by region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    MeanScores,
    ScoreDistribution,
    EssayStatus,
    SexDistribution,
    AgeDistribution,
    RaceDistribution,
    AbsenceByIncome,
    AbsenceByAge,
    AbsenceByRace,
}

impl Statistic {
    /// All statistics, in the fetch order of a render pass.
    pub const ALL: [Statistic; 9] = [
        Statistic::MeanScores,
        Statistic::ScoreDistribution,
        Statistic::EssayStatus,
        Statistic::SexDistribution,
        Statistic::AgeDistribution,
        Statistic::RaceDistribution,
        Statistic::AbsenceByIncome,
        Statistic::AbsenceByAge,
        Statistic::AbsenceByRace,
    ];

    /// Stable identifier used for cache keys and warning lists.
    pub fn key(&self) -> &'static str {
        match self {
            Statistic::MeanScores => "medias",
            Statistic::ScoreDistribution => "distribuicao",
            Statistic::EssayStatus => "status_redacao",
            Statistic::SexDistribution => "distribuicao_sexo",
            Statistic::AgeDistribution => "distribuicao_faixa_etaria",
            Statistic::RaceDistribution => "distribuicao_raca",
            Statistic::AbsenceByIncome => "ausencia_renda",
            Statistic::AbsenceByAge => "ausencia_faixa_etaria",
            Statistic::AbsenceByRace => "ausencia_raca",
        }
    }

    /// Upstream request path for this statistic and region.
    ///
    /// Path spellings are fixed by the upstream API (note the mix of hyphens
    /// and underscores).
    pub fn path(&self, region: Region) -> String {
        let template = match self {
            Statistic::MeanScores => "/regioes/medias/regiao",
            Statistic::ScoreDistribution => "/regioes/distribuicao/regiao",
            Statistic::EssayStatus => "/regioes/status_redacao/regiao",
            Statistic::SexDistribution => "/regioes/distribuicao-sexo/regiao",
            Statistic::AgeDistribution => "/regioes/distribuicao-faixa-etaria/regiao",
            Statistic::RaceDistribution => "/regioes/distribuicao_raca/regiao",
            Statistic::AbsenceByIncome => "/regioes/distribuicao_ausencia_renda/regiao",
            Statistic::AbsenceByAge => "/regioes/distribuicao_ausencia_faixa_etaria/regiao",
            Statistic::AbsenceByRace => "/regioes/distribuicao_ausencia_raca/regiao",
        };
        format!("{template}/{region}")
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_templated_with_region() {
        assert_eq!(
            Statistic::MeanScores.path(Region::Nordeste),
            "/regioes/medias/regiao/Nordeste"
        );
        assert_eq!(
            Statistic::SexDistribution.path(Region::CentroOeste),
            "/regioes/distribuicao-sexo/regiao/Centro-Oeste"
        );
        assert_eq!(
            Statistic::AbsenceByAge.path(Region::Sul),
            "/regioes/distribuicao_ausencia_faixa_etaria/regiao/Sul"
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Statistic::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Statistic::ALL.len());
    }
}
