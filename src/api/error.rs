//! Mapping of task failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::task::{
    domain::{TaskDomainError, TaskId},
    services::TaskRepositoryError,
};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Errors surfaced by the task routes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Request content failed validation, including a missing or
    /// undecodable body.
    #[error("{0}")]
    Validation(String),

    /// Storage failed; details are logged rather than returned.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "TASK_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::Validation(domain) => Self::from(domain),
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Storage(store) => {
                tracing::error!(error = %store, "task storage failure");
                Self::Internal
            }
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.error_code().to_owned(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
