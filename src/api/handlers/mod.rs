//! HTTP handlers for the JSON API.

mod health;
mod region;

pub use health::health_handler;
pub use region::region_dashboard_handler;
