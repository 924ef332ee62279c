//! Request and response DTOs for the JSON API.

pub mod health;
pub mod region;
