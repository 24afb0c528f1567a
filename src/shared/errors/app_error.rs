use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog store answered with a non-success status.
    #[error("Upstream error ({status}): {message}")]
    UpstreamError {
        status: u16,
        message: String,
        details: Value,
    },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(format!("Malformed response body: {}", err))
        } else if let Some(status) = err.status() {
            AppError::UpstreamError {
                status: status.as_u16(),
                message: format!("HTTP {}", status),
                details: Value::Null,
            }
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl AppError {
    /// Whether the failure came from the catalog store rather than the caller
    /// or this process.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamError { .. }
                | AppError::ExternalServiceError(_)
                | AppError::SerializationError(_)
        )
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
