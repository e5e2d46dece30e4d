use crate::storage::StorageError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

use super::types::ErrorResponse;

#[derive(Debug, Clone, Copy, Display)]
pub enum TodoAction {
    #[strum(serialize = "list todos")]
    List,
    #[strum(serialize = "create todo")]
    Create,
    #[strum(serialize = "get todo")]
    Get,
    #[strum(serialize = "update todo")]
    Update,
    #[strum(serialize = "delete todo")]
    Delete,
}

#[derive(Debug, Error, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The source stays in the logs; clients only see the action.
    #[error("Failed to {action}")]
    Storage {
        action: TodoAction,
        #[source]
        source: StorageError,
    },

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub(crate) fn storage(action: TodoAction) -> impl FnOnce(StorageError) -> Self {
        move |source| match source {
            StorageError::NotFound => Self::TodoNotFound,
            source => Self::Storage { action, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::TitleRequired | AppError::EmptyTitle | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::TodoNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Storage { .. } | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self, kind = %self.as_ref(), "AppError");
        } else {
            tracing::warn!(error = %self, kind = %self.as_ref(), "AppError");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_not_found_becomes_todo_not_found() {
        let error = AppError::storage(TodoAction::Get)(StorageError::NotFound);
        assert!(matches!(error, AppError::TodoNotFound));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failure_hides_source() {
        let error = AppError::storage(TodoAction::Update)(StorageError::Database(
            sqlx::Error::PoolClosed,
        ));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Failed to update todo");
        assert_eq!(error.as_ref(), "storage");
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        assert_eq!(AppError::TitleRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::TitleRequired.to_string(), "Title is required");
        assert_eq!(
            AppError::InvalidBody("oops".into()).to_string(),
            "Invalid request body: oops"
        );
    }
}
