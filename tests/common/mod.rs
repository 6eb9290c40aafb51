//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use institute_site::{create_router, AppState, Settings};

/// Settings pointing at the templates and assets shipped with the crate.
pub fn test_settings() -> Settings {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Settings {
        template_dir: root.join("templates"),
        static_dir: root.join("static"),
        ..Settings::default()
    }
}

pub fn app(settings: Settings) -> Router {
    create_router(AppState::from_settings(settings))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        // Lossy so compressed bodies can still be inspected by their headers
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(path: &str) -> TestResponse {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app(test_settings()), request).await
}

/// POST a form body; `fields` are url-encoded here.
pub async fn post_form(path: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    send(app(test_settings()), request).await
}

fn encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
