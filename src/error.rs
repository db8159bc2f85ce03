use crate::items::StoreError;
use crate::models::MessageResponse;
use crate::storage::ImageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Errors a handler can return. Every variant renders as a `{"message": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Store(StoreError::UnknownCategory(_) | StoreError::IdsExhausted) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Store(StoreError::DuplicateId(_)) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Store(e) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access item storage".to_string(),
                )
            }
            AppError::Image(ImageError::InvalidExtension(_) | ImageError::InvalidName(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Image(ImageError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Image not found".to_string())
            }
            AppError::Image(e) => {
                tracing::error!("Image failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read image".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(MessageResponse::new(message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
