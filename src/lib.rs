//! Institute Site - Marketing site for a programming certification institute
//!
//! Static content pages rendered from templates, plus contact and
//! newsletter forms, served with Axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings and constants
//! - **domain**: Form submissions and their rules
//! - **infra**: Template engine, filters and globals
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Show the effective settings
//! cargo run -- config
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Settings;
pub use errors::{AppError, AppResult};
