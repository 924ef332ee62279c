//! Domain entities: filters and upstream payload records.

mod competency;
mod region;
mod stats;

pub use competency::Competency;
pub use region::Region;
pub use stats::{
    AbsenceByAgeGroup, AbsenceByIncome, AbsenceByRace, AgeGroupCount, EssayStatusCount, MeanScores,
    RaceCount, ScoreRow, SexCount,
};
