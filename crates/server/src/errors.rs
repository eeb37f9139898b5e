use anycopy::{GenerationError, RequestError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// The request failed pre-flight validation.
    Validation(RequestError),
    /// The generation service could not produce a result.
    Generation(GenerationError),
    /// The requested resource does not exist.
    NotFound(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::Validation(err)
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Generation(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Validation(err) => {
                warn!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Generation(err) => {
                error!("GenerationError: {:?}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
