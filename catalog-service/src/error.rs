use crate::models::responses::ErrorResponse;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),
    #[error("Book not found")]
    NotFound,
    #[error("Payload too large")]
    PayloadTooLarge,
    /// Reported to the caller as `message` only; `source` goes to the log.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CatalogError {
    pub fn internal(
        message: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        CatalogError::Internal {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            CatalogError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartRejection> for CatalogError {
    fn from(rejection: MultipartRejection) -> Self {
        CatalogError::Validation(format!("Invalid form data: {}", rejection.body_text()))
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        if let CatalogError::Internal { message, source } = &self {
            error!("{}: {}", message, source);
        }

        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
