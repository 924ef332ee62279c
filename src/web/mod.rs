//! Web dashboard layer for the browser UI.
//!
//! Serves the home and region analysis pages. Uses Askama templates for
//! server-side rendering; Plotly figures are built server-side in
//! [`charts`] and handed to the client as JSON.
//!
//! # Modules
//!
//! - [`charts`] - Plotly figure builders
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod charts;
pub mod handlers;
pub mod routes;
