use thiserror::Error;
use windowplan_core::WindowplanError;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Window service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a length the calculator cannot use.
    #[error("Invalid maintenance window: {0}")]
    InvalidWindow(String),
}

impl From<WindowError> for WindowplanError {
    fn from(err: WindowError) -> Self {
        WindowplanError::UpstreamUnavailable(err.to_string())
    }
}
