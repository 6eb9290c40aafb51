//! Application state shared across handlers.

use std::sync::Arc;

use axum::response::Html;
use minijinja::Value;

use crate::config::Settings;
use crate::errors::AppResult;
use crate::infra::{MiniJinjaEngine, TemplateEngine};

/// Read-only state: the settings and the template engine built from them.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub templates: Arc<dyn TemplateEngine>,
}

impl AppState {
    /// Build state with the minijinja engine reading `settings.template_dir`.
    pub fn from_settings(settings: Settings) -> Self {
        let templates = Arc::new(MiniJinjaEngine::new(&settings));
        Self::new(Arc::new(settings), templates)
    }

    /// Create state with a manually injected engine.
    pub fn new(settings: Arc<Settings>, templates: Arc<dyn TemplateEngine>) -> Self {
        Self {
            settings,
            templates,
        }
    }

    /// Render a template into an HTML response body.
    pub fn render(&self, template_name: &str, context: Value) -> AppResult<Html<String>> {
        let html = self.templates.render(template_name, context)?;
        Ok(Html(html))
    }
}
