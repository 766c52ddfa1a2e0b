use admin_common::views::ApiErrorResponse;
use admin_db::storage::StoreError;
use axum::{Json, response::IntoResponse};
use thiserror::Error;

use crate::service::UserServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// The single place where service failure kinds become API failure kinds:
/// missing fields are invalid input, unresolved ids are not-found, and store
/// failures stay store failures.
impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::MissingField(_) => Self::InvalidInput(err.to_string()),
            UserServiceError::NotFound(_) => Self::NotFound,
            UserServiceError::Store(se) => Self::Storage(se),
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        ApiErrorResponse {
            code: match &err {
                ApiError::NotFound => Some("NotFound".into()),
                ApiError::InvalidInput(_) => Some("InvalidInput".into()),
                ApiError::Storage(_) => Some("InternalError".into()),
            },

            message: match &err {
                ApiError::NotFound => "The requested resource was not found.".into(),
                ApiError::InvalidInput(msg) => msg.clone(),
                ApiError::Storage(_) => {
                    "Something went wrong on our end. Please try again later.".into()
                }
            },

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = match &self {
            Self::NotFound => axum::http::StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => axum::http::StatusCode::BAD_REQUEST,
            Self::Storage(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, Json(Into::<ApiErrorResponse>::into(self))).into_response()
    }
}
