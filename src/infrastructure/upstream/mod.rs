//! Upstream API integration.

mod enem_api;

pub use enem_api::EnemApiClient;
