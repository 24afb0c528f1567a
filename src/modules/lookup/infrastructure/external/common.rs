use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Common HTTP handling for catalog store clients
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Create an HTTP client with consistent configuration
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Read the whole body as JSON.
    ///
    /// On an error status an unparsable body reads as `{}` so the status can
    /// still be reported; on success it is a serialization error.
    pub async fn read_json_body(response: reqwest::Response) -> AppResult<(StatusCode, Value)> {
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => Value::Object(Default::default()),
            Err(e) => return Err(e.into()),
        };
        Ok((status, body))
    }

    /// Map a non-success status to an upstream error carrying the store's body
    pub fn ensure_success(status: StatusCode, body: &Value, store_name: &str) -> AppResult<()> {
        if status.is_success() {
            return Ok(());
        }

        Err(AppError::UpstreamError {
            status: status.as_u16(),
            message: format!("Erro ao consultar {}", store_name),
            details: body.clone(),
        })
    }
}
