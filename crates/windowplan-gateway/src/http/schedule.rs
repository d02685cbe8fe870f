//! Schedule endpoints.
//!
//! `POST /api/schedule` with a JSON array of workload items
//! (`[{"identifier": "...", "durationInHours": 7}]`) returns the new
//! schedule id as a JSON string. `GET /api/schedule/{scheduleId}` returns
//! `[{"identifier": "...", "order": 2}]`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::info;
use windowplan_core::{ScheduleEntry, ScheduleId, WindowplanError, WorkloadItem};

use super::error::ApiError;
use crate::app::AppState;

/// POST /api/schedule
///
/// A body that is not an array of well-formed workload items is reported as
/// `INVALID_INPUT` (400) like any other input violation.
pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<WorkloadItem>>, JsonRejection>,
) -> Result<Json<ScheduleId>, ApiError> {
    let Json(items) =
        body.map_err(|rejection| WindowplanError::InvalidInput(rejection.body_text()))?;
    info!(items = items.len(), "create schedule requested");
    let id = state.planner.create(&items).await?;
    Ok(Json(id))
}

/// GET /api/schedule/{scheduleId}
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(schedule_id): Path<String>,
) -> Result<Json<Vec<ScheduleEntry>>, ApiError> {
    info!(%schedule_id, "get schedule requested");
    let id: ScheduleId = schedule_id.parse()?;
    let entries = state.planner.get(&id)?;
    Ok(Json(entries))
}
