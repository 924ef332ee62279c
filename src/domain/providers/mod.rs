//! Provider traits abstracting the upstream statistics source.

mod stats_provider;

pub use stats_provider::StatsProvider;

#[cfg(test)]
pub use stats_provider::MockStatsProvider;
