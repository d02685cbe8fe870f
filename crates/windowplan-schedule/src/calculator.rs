use std::collections::HashSet;

use windowplan_core::{ExecutionOrder, MaintenanceWindow, ScheduleEntry, WorkloadItem};

use crate::error::{Result, ScheduleError};

/// Classify a single duration against `window`.
///
/// The threshold is inclusive: an item exactly as long as the window
/// needs the whole window and is ordered after everything that fits.
pub fn classify(duration_in_hours: f64, window: &MaintenanceWindow) -> ExecutionOrder {
    if duration_in_hours >= window.length_in_hours {
        ExecutionOrder::ExceedsWindow
    } else {
        ExecutionOrder::WithinWindow
    }
}

/// Compute one schedule entry per workload item, in input order.
///
/// Rejects negative or non-finite durations and window lengths, empty
/// identifiers, and identifiers repeated within the batch. An empty batch
/// yields an empty schedule.
pub fn calculate(items: &[WorkloadItem], window: &MaintenanceWindow) -> Result<Vec<ScheduleEntry>> {
    check_hours("maintenance window length", window.length_in_hours)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.identifier.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "workload item identifier must not be empty".to_string(),
            ));
        }
        if !seen.insert(item.identifier.as_str()) {
            return Err(ScheduleError::InvalidInput(format!(
                "duplicate workload item identifier: {}",
                item.identifier
            )));
        }
        check_hours(
            &format!("duration of workload item {}", item.identifier),
            item.duration_in_hours,
        )?;
    }

    Ok(items
        .iter()
        .map(|item| ScheduleEntry {
            identifier: item.identifier.clone(),
            order: classify(item.duration_in_hours, window),
        })
        .collect())
}

fn check_hours(what: &str, hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(ScheduleError::InvalidInput(format!(
            "{what} must be a non-negative number of hours, got {hours}"
        )));
    }
    Ok(())
}
