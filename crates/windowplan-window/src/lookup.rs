use async_trait::async_trait;
use windowplan_core::MaintenanceWindow;

use crate::error::WindowError;

/// Source of the currently planned maintenance window.
///
/// Implementations do not retry; a failed lookup is reported to the caller
/// as-is.
#[async_trait]
pub trait MaintenanceWindowLookup: Send + Sync {
    /// Lookup name for logging and error messages.
    fn name(&self) -> &str;

    /// Fetch the planned maintenance window.
    async fn planned_window(&self) -> Result<MaintenanceWindow, WindowError>;
}

/// Reject lengths the calculator cannot compare against.
pub(crate) fn ensure_usable(window: MaintenanceWindow) -> Result<MaintenanceWindow, WindowError> {
    if !window.length_in_hours.is_finite() || window.length_in_hours < 0.0 {
        return Err(WindowError::InvalidWindow(format!(
            "length must be a non-negative number of hours, got {}",
            window.length_in_hours
        )));
    }
    Ok(window)
}
