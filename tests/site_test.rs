//! Integration tests for page routes, error pages and health.
//!
//! The router is driven in-process with the templates shipped in
//! `templates/`; no socket is bound.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::get as get_route,
    Router,
};

use common::{app, get, send, test_settings};
use institute_site::{api::with_page_layers, AppState, Settings};

// =============================================================================
// Static Pages
// =============================================================================

#[tokio::test]
async fn test_static_pages_render_with_titles() {
    let pages = [
        ("/", "Python Institute - Professional Python Certification &amp; Training Courses"),
        ("/courses", "Courses - Python Institute"),
        ("/certifications", "Certifications - Python Institute"),
        ("/roadmap", "Learning Roadmap - Python Institute"),
        ("/exam-info", "Exam Information - Python Institute"),
        ("/faq", "FAQ - Python Institute"),
        ("/contact", "Contact Us - Python Institute"),
    ];

    for (path, title) in pages {
        let response = get(path).await;
        assert_eq!(response.status, StatusCode::OK, "status for {}", path);
        assert!(
            response.body.contains(&format!("<title>{}</title>", title)),
            "title for {}",
            path
        );
    }
}

#[tokio::test]
async fn test_section_marker_is_rendered() {
    let response = get("/faq").await;
    assert!(response.body.contains(r#"data-active-section="faq""#));

    let home = get("/").await;
    assert!(!home.body.contains("data-active-section"));
}

#[tokio::test]
async fn test_settings_are_injected_into_templates() {
    let settings = Settings {
        contact_email: "hello@academy.test".to_string(),
        ..test_settings()
    };
    let request = Request::builder().uri("/contact").body(Body::empty()).unwrap();
    let response = send(app(settings), request).await;

    assert!(response.body.contains("hello@academy.test"));
}

#[tokio::test]
async fn test_currency_filter_in_course_cards() {
    let response = get("/courses").await;
    assert!(response.body.contains("$149.00"));
    assert!(response.body.contains("$449.50"));
}

#[tokio::test]
async fn test_pages_carry_process_time_header() {
    for path in ["/", "/faq", "/404", "/no-such-page", "/static/css/site.css"] {
        let response = get(path).await;
        let value = response
            .headers
            .get("x-process-time")
            .unwrap_or_else(|| panic!("missing header on {}", path));
        assert!(value.to_str().unwrap().parse::<f64>().is_ok());
    }
}

#[tokio::test]
async fn test_large_pages_are_gzipped() {
    let request = Request::builder()
        .uri("/")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let response = send(app(test_settings()), request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers.get(header::CONTENT_ENCODING).unwrap(), "gzip");
    assert!(response.headers.get("x-process-time").is_some());
}

#[tokio::test]
async fn test_small_bodies_are_not_gzipped() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let response = send(app(test_settings()), request).await;

    assert!(response.headers.get(header::CONTENT_ENCODING).is_none());
}

#[tokio::test]
async fn test_cors_preflight_is_permissive_and_timed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/contact")
        .header(header::ORIGIN, "https://partner.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(app(test_settings()), request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(response.headers.get("x-process-time").is_some());
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let response = get("/static/js/exam-tabs.js").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("tabpanel"));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_returns_ok_json() {
    let response = get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get("x-process-time").is_none());

    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["app_name"], "Python Institute");
}

// =============================================================================
// Error Pages
// =============================================================================

#[tokio::test]
async fn test_explicit_error_pages() {
    let not_found = get("/404").await;
    assert_eq!(not_found.status, StatusCode::NOT_FOUND);
    assert!(not_found.body.contains(r#"<h1 class="error-code">404</h1>"#));
    assert!(not_found.body.contains("Page not found"));
    assert!(not_found.body.contains("<title>404 Not Found - Python Institute</title>"));

    let server_error = get("/500").await;
    assert_eq!(server_error.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(server_error.body.contains(r#"<h1 class="error-code">500</h1>"#));
    assert!(server_error.body.contains("Internal server error"));
}

#[tokio::test]
async fn test_error_title_ignores_custom_app_name() {
    let settings = Settings {
        app_name: "Rust Academy".to_string(),
        ..test_settings()
    };
    let request = Request::builder().uri("/404").body(Body::empty()).unwrap();
    let response = send(app(settings), request).await;

    assert!(response.body.contains("<title>404 Not Found - Python Institute</title>"));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let response = get("/no-such-page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains(r#"<h1 class="error-code">404</h1>"#));
    assert!(response
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}

async fn boom() -> &'static str {
    panic!("kaboom in handler")
}

async fn get_boom(settings: Settings) -> common::TestResponse {
    let state = AppState::from_settings(settings);
    let router: Router = with_page_layers(Router::new().route("/boom", get_route(boom)), state.clone())
        .with_state(state);

    let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    send(router, request).await
}

#[tokio::test]
async fn test_panic_renders_generic_error_page() {
    let response = get_boom(test_settings()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("Internal Server Error"));
    assert!(!response.body.contains("kaboom"));
}

#[tokio::test]
async fn test_panic_detail_shown_in_debug() {
    let settings = Settings {
        debug: true,
        ..test_settings()
    };
    let response = get_boom(settings).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("kaboom in handler"));
}

#[tokio::test]
async fn test_missing_template_dir_is_a_500_not_a_crash() {
    let settings = Settings {
        template_dir: "/definitely/not/a/template/dir".into(),
        ..test_settings()
    };
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = send(app(settings), request).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Internal Server Error");
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_malformed_configuration_still_serves() {
    let base = test_settings();
    let settings = Settings::from_lookup(|key| match key {
        "PORT" => Some("not-a-port".to_string()),
        "COURSE_LEVELS" => Some("[broken".to_string()),
        "TEMPLATE_DIR" => Some(base.template_dir.display().to_string()),
        "STATIC_DIR" => Some(base.static_dir.display().to_string()),
        _ => None,
    });
    assert_eq!(settings.port, 8000);

    let request = Request::builder().uri("/roadmap").body(Body::empty()).unwrap();
    let response = send(app(settings), request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Intermediate"));
}

#[tokio::test]
async fn test_api_docs_only_in_debug() {
    let request = || Request::builder().uri("/api/openapi.json").body(Body::empty()).unwrap();

    let production = send(app(test_settings()), request()).await;
    assert_eq!(production.status, StatusCode::NOT_FOUND);

    let debug = Settings {
        debug: true,
        ..test_settings()
    };
    let response = send(app(debug), request()).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("/newsletter-signup"));
    assert!(response.headers.get("x-process-time").is_some());
}
