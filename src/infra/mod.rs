//! Infrastructure layer - Template rendering
//!
//! This module handles the template engine and the filters and globals
//! registered on it at startup.

pub mod filters;
pub mod templates;

pub use templates::{MiniJinjaEngine, TemplateEngine};

#[cfg(test)]
pub use templates::MockTemplateEngine;
