use std::sync::Arc;

use tracing::{info, warn};
use windowplan_core::{Result, ScheduleEntry, ScheduleId, WorkloadItem};
use windowplan_schedule::{calculate, ScheduleStore};
use windowplan_window::MaintenanceWindowLookup;

/// Composes window lookup, schedule calculation and storage.
///
/// Errors from any step are surfaced unchanged in the core taxonomy; the
/// planner neither retries nor falls back.
pub struct SchedulePlanner {
    store: Arc<dyn ScheduleStore>,
    windows: Arc<dyn MaintenanceWindowLookup>,
}

impl SchedulePlanner {
    pub fn new(store: Arc<dyn ScheduleStore>, windows: Arc<dyn MaintenanceWindowLookup>) -> Self {
        Self { store, windows }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    pub fn window_source(&self) -> &str {
        self.windows.name()
    }

    /// Compute a schedule for `items` against the planned window and save it.
    pub async fn create(&self, items: &[WorkloadItem]) -> Result<ScheduleId> {
        let window = self.windows.planned_window().await.map_err(|e| {
            warn!(source = self.windows.name(), error = %e, "maintenance window lookup failed");
            e
        })?;
        let entries = calculate(items, &window)?;
        let id = self.store.save(&entries)?;
        info!(
            schedule_id = %id,
            items = items.len(),
            window_hours = window.length_in_hours,
            "schedule created"
        );
        Ok(id)
    }

    /// Return the entries saved under `id`.
    pub fn get(&self, id: &ScheduleId) -> Result<Vec<ScheduleEntry>> {
        Ok(self.store.read(id)?)
    }
}
