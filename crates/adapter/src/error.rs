use thiserror::Error;

/// Errors raised while reading an inbound command line
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("message has no \"command\" field")]
    MissingCommand,
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdapterError {
    /// Stable machine-readable code sent back in error lines
    pub fn code(&self) -> &'static str {
        match self {
            AdapterError::UnknownCommand(_) => "invalid_command",
            AdapterError::MissingCommand => "missing_command",
            AdapterError::Json(_) => "invalid_json",
        }
    }
}
