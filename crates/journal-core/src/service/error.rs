//! Error responses for the entry service.
//!
//! Expected failures (bad input, missing rows) are client errors with a
//! status and a message the caller sees. Anything else is a defect: it is
//! logged with a request id and the caller only gets a generic 500.

use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::JournalError;

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Message returned for defects; details stay in the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "an unexpected error occurred";

/// Header carrying the id under which a defect was logged.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug)]
pub enum ApiError {
    /// Intentionally raised error with a caller-visible message
    Client { status: StatusCode, message: String },

    /// Unexpected failure
    Internal(JournalError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::Client {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::Client {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Client { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JournalError> for ApiError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::NotFound(message) => ApiError::not_found(message),
            JournalError::Validation(message) | JournalError::InvalidInput(message) => {
                ApiError::bad_request(message)
            }
            JournalError::Conflict(message) => ApiError::Client {
                status: StatusCode::CONFLICT,
                message,
            },
            other => ApiError::Internal(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Client { status, message } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Internal(err) => {
                let request_id = Uuid::new_v4().to_string();
                error!("[{}] {}", request_id, err);
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response();
                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                response
            }
        }
    }
}
