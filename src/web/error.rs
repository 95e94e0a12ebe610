//! HTTP error type and its mapping from [`DesignerError`].

use crate::utils::error::DesignerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Invalid input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The image service failed or answered with something unusable.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// The image service did not answer in time.
    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            HttpError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::BadGateway(msg)
            | HttpError::GatewayTimeout(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message().to_string(),
            status: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<DesignerError> for HttpError {
    fn from(err: DesignerError) -> Self {
        let message = err.user_friendly_message();
        match err {
            DesignerError::ValidationError { .. } => HttpError::BadRequest(message),
            // 400 from upstream means the prompt itself was refused (e.g. content policy).
            DesignerError::ApiError { status: 400, .. } => HttpError::BadRequest(message),
            DesignerError::HttpError(ref e) if e.is_timeout() => HttpError::GatewayTimeout(message),
            DesignerError::HttpError(_)
            | DesignerError::ApiError { .. }
            | DesignerError::DecodeError(_)
            | DesignerError::GenerationError { .. } => HttpError::BadGateway(message),
            _ => HttpError::Internal(message),
        }
    }
}
