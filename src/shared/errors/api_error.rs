use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::AppError;

/// JSON body returned by the HTTP layer when a request fails.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub details: Value,
}

impl AppError {
    /// HTTP status a failed lookup is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ExternalServiceError(_) | AppError::SerializationError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_body(&self) -> ApiErrorBody {
        match self {
            AppError::InvalidInput(message) => ApiErrorBody {
                error: message.clone(),
                details: Value::Null,
            },
            AppError::UpstreamError {
                message, details, ..
            } => ApiErrorBody {
                error: message.clone(),
                details: details.clone(),
            },
            AppError::ExternalServiceError(message) | AppError::SerializationError(message) => {
                ApiErrorBody {
                    error: "Erro ao consultar o catálogo".to_string(),
                    details: Value::String(message.clone()),
                }
            }
            AppError::ConfigError(message) => ApiErrorBody {
                error: "Configuração inválida".to_string(),
                details: Value::String(message.clone()),
            },
            AppError::InternalError(message) => ApiErrorBody {
                error: "Erro interno".to_string(),
                details: Value::String(message.clone()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }
        (status, Json(self.to_body())).into_response()
    }
}
