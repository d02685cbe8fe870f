use thiserror::Error;
use windowplan_core::WindowplanError;

/// Errors that can occur while computing or storing schedules.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A workload item or the maintenance window violates the input contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No schedule was ever saved under the given ID.
    #[error("Schedule not found: {id}")]
    NotFound { id: String },

    /// The store cannot be used (e.g. its lock was poisoned by a panic).
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Underlying SQLite / rusqlite error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

impl From<ScheduleError> for WindowplanError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidInput(msg) => WindowplanError::InvalidInput(msg),
            ScheduleError::NotFound { id } => WindowplanError::NotFound { id },
            ScheduleError::Storage(msg) => WindowplanError::StorageFailure(msg),
            ScheduleError::Database(e) => WindowplanError::StorageFailure(e.to_string()),
        }
    }
}
