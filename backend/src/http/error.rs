//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Rejected numerology input
    Numerology(NumerologyError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Numerology(e) => {
                let message = match &e {
                    NumerologyError::InvalidDateFormat { field: "dob", .. } => {
                        "Provide valid DOB in DD-MM-YYYY.".to_string()
                    }
                    NumerologyError::InvalidDateFormat { .. } => {
                        "Provide valid date in DD-MM-YYYY.".to_string()
                    }
                    NumerologyError::YearOutOfRange {
                        field, min, max, ..
                    } => format!("Provide valid {} between {} and {}.", field, min, max),
                    NumerologyError::InvalidCalendarDate { .. } => e.to_string(),
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new(e.code(), message).with_details(e.to_string()),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        tracing::debug!(
            status = status.as_u16(),
            code = %error.code,
            message = %error.message,
            "request rejected"
        );
        (status, Json(error)).into_response()
    }
}

impl From<NumerologyError> for AppError {
    fn from(err: NumerologyError) -> Self {
        AppError::Numerology(err)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
