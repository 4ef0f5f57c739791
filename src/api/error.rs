//! HTTP error mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use super::Envelope;
use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError, services::TaskServiceError};

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
///
/// The `Display` text of each variant is the envelope `message`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The title was missing or blank.
    #[error("Task title is required")]
    TitleRequired,

    /// The body was not valid JSON for the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The path identifier does not name a stored task.
    #[error("Task not found")]
    NotFound,

    /// The store failed unexpectedly.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Returns the HTTP status code for the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::TitleRequired | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Domain(TaskDomainError::EmptyTitle) => Self::TitleRequired,
            TaskServiceError::Domain(
                TaskDomainError::InvalidTaskId(_) | TaskDomainError::UnparseableTaskId(_),
            )
            | TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => Self::NotFound,
            TaskServiceError::Repository(failure @ TaskRepositoryError::Persistence(_)) => {
                error!(err = %failure, "task store failure");
                Self::Internal
            }
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        TaskServiceError::Domain(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, message = %self, "request rejected");
        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}
