//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Errors turn
//! into responses carrying an [`ErrorPage`] extension, which the
//! `render_error_pages` middleware replaces with the rendered error template.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::GENERIC_ERROR_MESSAGE;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    /// A required form field was missing or could not be parsed
    #[error("Invalid form submission: {0}")]
    UnprocessableForm(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error details attached to a response for the error-page middleware.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    /// Message safe to show to any visitor
    pub message: String,
    /// Full error text, only shown in debug mode
    pub detail: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::UnprocessableForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound | AppError::UnprocessableForm(_) => self.to_string(),
            AppError::Template(_) | AppError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        AppError::UnprocessableForm(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = ErrorPage {
            status,
            message: self.user_message(),
            detail: self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!("Request error: {}", page.detail);
        } else {
            tracing::debug!("Request rejected: {}", page.detail);
        }

        let mut response = (status, page.message.clone()).into_response();
        response.extensions_mut().insert(page);
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
