//! Shared building blocks for the windowplan workspace: wire-level domain
//! types, the top-level error taxonomy and configuration loading.

pub mod config;
pub mod error;
pub mod types;

pub use error::{Result, WindowplanError};
pub use types::{ExecutionOrder, MaintenanceWindow, ScheduleEntry, ScheduleId, WorkloadItem};
