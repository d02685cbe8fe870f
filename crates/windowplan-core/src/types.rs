use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work with a duration, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadItem {
    /// Opaque token chosen by the caller; copied verbatim into the entry.
    #[serde(alias = "Identifier")]
    pub identifier: String,
    #[serde(alias = "DurationInHours")]
    pub duration_in_hours: f64,
}

impl WorkloadItem {
    pub fn new(identifier: impl Into<String>, duration_in_hours: f64) -> Self {
        Self {
            identifier: identifier.into(),
            duration_in_hours,
        }
    }
}

/// Time budget published by the maintenance window service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    #[serde(alias = "LengthInHours")]
    pub length_in_hours: f64,
}

impl MaintenanceWindow {
    pub fn new(length_in_hours: f64) -> Self {
        Self { length_in_hours }
    }
}

/// Coarse execution category. Serialized as the integers `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ExecutionOrder {
    /// The item fits inside the maintenance window.
    WithinWindow,
    /// The item needs at least the whole window.
    ExceedsWindow,
}

impl ExecutionOrder {
    pub fn as_u8(self) -> u8 {
        match self {
            ExecutionOrder::WithinWindow => 1,
            ExecutionOrder::ExceedsWindow => 2,
        }
    }
}

impl From<ExecutionOrder> for u8 {
    fn from(order: ExecutionOrder) -> u8 {
        order.as_u8()
    }
}

impl TryFrom<u8> for ExecutionOrder {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(ExecutionOrder::WithinWindow),
            2 => Ok(ExecutionOrder::ExceedsWindow),
            other => Err(format!("unknown execution order: {other}")),
        }
    }
}

impl std::fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Computed order for one workload item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(alias = "Identifier")]
    pub identifier: String,
    #[serde(alias = "Order")]
    pub order: ExecutionOrder,
}

/// Identifier handed out by a schedule store on save (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    /// Generate a fresh random identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ScheduleId {
    type Err = crate::error::WindowplanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|e| {
            crate::error::WindowplanError::InvalidInput(format!("invalid schedule id '{s}': {e}"))
        })
    }
}
