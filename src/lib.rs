//! # ENEM 2023 Dashboard
//!
//! A web dashboard for aggregated ENEM 2023 statistics, built with Axum.
//! Fetches pre-aggregated figures from an upstream REST API, memoizes them
//! with a TTL cache and renders score, profile and absence charts per
//! Brazilian region.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Regions, competencies, statistic payloads
//!   and the provider trait
//! - **Application Layer** ([`application`]) - Dashboard assembly and
//!   display-ready reshaping (absence rates, histogram, sorts)
//! - **Infrastructure Layer** ([`infrastructure`]) - Upstream HTTP client and
//!   TTL memoization
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML pages with server-built Plotly figures
//!
//! ## Features
//!
//! - Nine pre-aggregated statistics per region, fetched fail-open: an
//!   unavailable statistic degrades its section, never the page
//! - TTL-memoized fetches (10 minutes by default), including "no data"
//!   results
//! - Rate limiting and request tracing
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export API_BASE_URL="http://localhost:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RegionStatsService;
    pub use crate::domain::entities::{Competency, Region};
    pub use crate::domain::providers::StatsProvider;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
