//! HTTP middleware for the public surface.

pub mod rate_limit;
pub mod tracing;
