//! Error pages: the explicit `/404` and `/500` routes and the fallback for
//! unknown routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};
use minijinja::{context, Value};

use crate::api::extractors::PageRequest;
use crate::api::AppState;
use crate::config::PAGE_TITLE_SUFFIX;
use crate::errors::{AppError, AppResult};

pub const ERROR_TEMPLATE: &str = "error.html";

/// `"404 Not Found - Python Institute"`
pub fn error_title(status: StatusCode) -> String {
    format!(
        "{} {} - {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error"),
        PAGE_TITLE_SUFFIX
    )
}

/// Context for `error.html`. `detail` is only passed in debug mode.
pub fn error_context(
    request: PageRequest,
    status: StatusCode,
    message: &str,
    detail: Option<&str>,
) -> Value {
    context! {
        request => request,
        error_code => status.as_u16(),
        error_msg => message,
        error_detail => detail,
        page_title => error_title(status),
    }
}

fn render_status_page(
    state: &AppState,
    request: PageRequest,
    status: StatusCode,
    message: &str,
) -> AppResult<(StatusCode, Html<String>)> {
    let context = error_context(request, status, message, None);
    Ok((status, state.render(ERROR_TEMPLATE, context)?))
}

/// Custom 404 page
pub async fn not_found_page(
    State(state): State<AppState>,
    request: PageRequest,
) -> AppResult<(StatusCode, Html<String>)> {
    render_status_page(&state, request, StatusCode::NOT_FOUND, "Page not found")
}

/// Custom 500 page
pub async fn server_error_page(
    State(state): State<AppState>,
    request: PageRequest,
) -> AppResult<(StatusCode, Html<String>)> {
    render_status_page(
        &state,
        request,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    )
}

/// Unknown routes; rendered by the error-page middleware
pub async fn fallback() -> AppError {
    AppError::NotFound
}
