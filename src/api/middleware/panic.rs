//! Panic recovery for `tower_http::catch_panic`.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::errors::AppError;

/// Convert a handler panic into an internal error response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::internal(format!("handler panicked: {}", detail)).into_response()
}
