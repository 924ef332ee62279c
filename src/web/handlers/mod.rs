//! HTML template rendering handlers for the dashboard pages.

mod home;
mod regions;

pub use home::home_handler;
pub use regions::regions_handler;
