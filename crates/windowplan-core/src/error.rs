use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowplanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Schedule not found: {id}")]
    NotFound { id: String },

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Maintenance window service unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl WindowplanError {
    /// Short error code string sent to clients in error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            WindowplanError::Config(_) => "CONFIG_ERROR",
            WindowplanError::InvalidInput(_) => "INVALID_INPUT",
            WindowplanError::NotFound { .. } => "NOT_FOUND",
            WindowplanError::StorageFailure(_) => "STORAGE_FAILURE",
            WindowplanError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
        }
    }
}

pub type Result<T> = std::result::Result<T, WindowplanError>;
