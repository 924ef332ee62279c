//! Core domain types: filter enums, payload records, provider traits.

pub mod entities;
pub mod providers;
pub mod statistic;

pub use statistic::Statistic;
