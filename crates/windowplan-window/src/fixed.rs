use async_trait::async_trait;
use windowplan_core::MaintenanceWindow;

use crate::error::WindowError;
use crate::lookup::{ensure_usable, MaintenanceWindowLookup};

/// Always answers with the same window. Used for local runs.
pub struct FixedWindowLookup {
    window: MaintenanceWindow,
}

impl FixedWindowLookup {
    pub fn new(length_in_hours: f64) -> Self {
        Self {
            window: MaintenanceWindow::new(length_in_hours),
        }
    }
}

#[async_trait]
impl MaintenanceWindowLookup for FixedWindowLookup {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn planned_window(&self) -> Result<MaintenanceWindow, WindowError> {
        ensure_usable(self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_length() {
        let lookup = FixedWindowLookup::new(5.0);
        let window = lookup.planned_window().await.unwrap();
        assert_eq!(window.length_in_hours, 5.0);
    }

    #[tokio::test]
    async fn negative_length_is_invalid() {
        let lookup = FixedWindowLookup::new(-3.0);
        assert!(matches!(
            lookup.planned_window().await,
            Err(WindowError::InvalidWindow(_))
        ));
    }
}
