use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use crate::api::validation::FieldErrors;
use crate::application::errors::CustomerError;

/// API error type translating service and validation failures into HTTP
/// responses
#[derive(Debug)]
pub enum ApiError {
    /// Domain error with a dedicated status and machine-readable code
    Domain {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
    /// Request payload failed validation
    Validation(FieldErrors),
    /// Anything else becomes a 500 with the raw error text
    Internal(String),
}

/// Body of a domain error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of a validation failure response
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub message: &'static str,
    pub errors: FieldErrors,
    pub timestamp: DateTime<Utc>,
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) => ApiError::Domain {
                status: StatusCode::NOT_FOUND,
                code: "CUSTOMER_NOT_FOUND",
                message: err.to_string(),
            },
            CustomerError::EmailAlreadyExists(_) => ApiError::Domain {
                status: StatusCode::CONFLICT,
                code: "EMAIL_ALREADY_EXISTS",
                message: err.to_string(),
            },
            CustomerError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain {
                status,
                code,
                message,
            } => {
                let body = ErrorResponse {
                    code,
                    message,
                    timestamp: Utc::now(),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Validation(errors) => {
                let body = ValidationErrorResponse {
                    message: "Validation failed",
                    errors,
                    timestamp: Utc::now(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message })),
            )
                .into_response(),
        }
    }
}
