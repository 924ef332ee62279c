//! Application services.

mod region_service;

pub use region_service::RegionStatsService;
