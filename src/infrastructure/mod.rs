//! Infrastructure layer: upstream HTTP client and fetch memoization.

pub mod cache;
pub mod upstream;
