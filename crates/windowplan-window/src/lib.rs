//! Maintenance window collaborators.
//!
//! The planner only depends on [`MaintenanceWindowLookup`]. Two
//! implementations ship here: [`HttpWindowLookup`] resolves the window
//! service through a service locator and asks it for the planned window,
//! [`FixedWindowLookup`] always answers with a configured length.

pub mod error;
pub mod fixed;
pub mod http;
pub mod lookup;

pub use error::WindowError;
pub use fixed::FixedWindowLookup;
pub use http::HttpWindowLookup;
pub use lookup::MaintenanceWindowLookup;
