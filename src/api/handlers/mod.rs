//! HTTP request handlers.

pub mod forms;
pub mod health;
pub mod pages;
pub mod status_pages;

pub use health::health_routes;
pub use pages::page_routes;
