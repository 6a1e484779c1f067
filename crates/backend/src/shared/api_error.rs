use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::actions::ConfirmationPrompt;
use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

use crate::shared::data::RepositoryError;
use crate::shared::record_module::DispatchError;

/// Ошибка HTTP-обработчика
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Conflict(String),

    /// Разрушающее действие не подтверждено; в теле ответа запрос подтверждения
    #[error("{}", .0.title)]
    ConfirmationRequired(ConfirmationPrompt),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Conflict(_) | ApiError::ConfirmationRequired(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ApiErrorBody {
        let message = self.to_string();
        match self {
            ApiError::BadRequest(_) => ApiErrorBody::bad_request(message),
            ApiError::NotFound(_) => ApiErrorBody::not_found(message),
            ApiError::Unavailable(_) => ApiErrorBody::unavailable(message),
            ApiError::Conflict(_) => ApiErrorBody::conflict(message),
            ApiError::ConfirmationRequired(_) => {
                ApiErrorBody::new("CONFIRMATION_REQUIRED", message)
            }
            ApiError::Validation(_) => ApiErrorBody::validation(message),
            ApiError::Internal(err) => {
                ApiErrorBody::internal("Internal server error").with_details(format!("{:#}", err))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        match self {
            ApiError::ConfirmationRequired(prompt) => (status, Json(prompt)).into_response(),
            other => (status, Json(other.body())).into_response(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            RepositoryError::AlreadyExists { .. } | RepositoryError::VersionConflict { .. } => {
                ApiError::Conflict(err.to_string())
            }
            RepositoryError::Validation(reason) => ApiError::Validation(reason),
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Unavailable { .. } => ApiError::Unavailable(err.to_string()),
            DispatchError::ConfirmationRequired(prompt) => ApiError::ConfirmationRequired(prompt),
            DispatchError::Repository(inner) => inner.into(),
        }
    }
}
