//! Application route configuration.

use axum::{middleware, routing::get, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::{predicate::SizeAbove, CompressionLayer};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{forms, health_routes, page_routes, status_pages};
use super::middleware::{panic_response, process_time, render_error_pages};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{COMPRESSION_MIN_BYTES, STATIC_URL_PREFIX};

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let mut router = with_page_layers(site_routes(&state), state.clone()).merge(health_routes());

    if state.settings.debug {
        router = router
            .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()));
    }

    router
        // Global middleware; timing wraps CORS and compression
        .layer(
            CompressionLayer::new()
                .gzip(true)
                .compress_when(SizeAbove::new(COMPRESSION_MIN_BYTES)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(process_time))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Pages, forms, error pages and static assets
fn site_routes(state: &AppState) -> Router<AppState> {
    page_routes()
        .route("/contact", post(forms::contact_form))
        .route("/newsletter-signup", post(forms::newsletter_signup))
        .route("/404", get(status_pages::not_found_page))
        .route("/500", get(status_pages::server_error_page))
        .nest_service(STATIC_URL_PREFIX, ServeDir::new(&state.settings.static_dir))
        .fallback(status_pages::fallback)
}

/// Wrap routes in panic recovery and error-page rendering (innermost first).
pub fn with_page_layers(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(state, render_error_pages))
}
