//! Application layer: dashboard assembly and view reshaping.

pub mod services;
pub mod views;
