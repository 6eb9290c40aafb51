//! Catch-all error rendering.
//!
//! Wraps the site routes and replaces any response carrying an
//! [`ErrorPage`] with the rendered error template. Error detail is only
//! shown when the site runs in debug mode.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::api::extractors::PageRequest;
use crate::api::handlers::status_pages::{error_context, ERROR_TEMPLATE};
use crate::api::AppState;
use crate::errors::ErrorPage;

pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let page_request = PageRequest::new(request.method(), request.uri());
    let response = next.run(request).await;

    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    let debug = state.settings.debug;
    let detail = debug.then_some(page.detail.as_str());
    let context = error_context(page_request, page.status, &page.message, detail);

    match state.templates.render(ERROR_TEMPLATE, context) {
        Ok(html) => (page.status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Could not render {}: {}", ERROR_TEMPLATE, e);
            let body = if debug { page.detail } else { page.message };
            (page.status, body).into_response()
        }
    }
}
