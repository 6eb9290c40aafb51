//! Template rendering backed by minijinja.

use minijinja::{default_auto_escape_callback, path_loader, Environment, Value};

use crate::config::Settings;

use super::filters;

#[cfg(test)]
use mockall::automock;

/// Renders a named template against a context mapping.
#[cfg_attr(test, automock)]
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

/// Engine loading templates from the configured template directory.
///
/// Filters and globals (`settings`, `is_debug`) are registered once here and
/// apply to every template.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new(settings: &Settings) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(path_loader(settings.template_dir.clone()));

        filters::register(&mut env);
        env.add_global("settings", Value::from_serialize(settings));
        env.add_global("is_debug", settings.debug);

        tracing::debug!("Templates loaded from {}", settings.template_dir.display());
        Self { env }
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}
