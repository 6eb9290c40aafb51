//! Display filters and functions available to every template.

use chrono::format::{Item, StrftimeItems};
use minijinja::{Environment, Error, ErrorKind};

/// Default pattern for `now()`: the current year, for copyright lines.
const DEFAULT_NOW_FORMAT: &str = "%Y";

/// Register every filter and function on the environment.
pub fn register(env: &mut Environment<'static>) {
    env.add_filter("currency", currency);
    env.add_function("now", now);
}

/// `{{ 49 | currency }}` renders `$49.00`.
pub fn currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// `{{ now() }}` or `{{ now("%d %B %Y") }}`, in UTC.
pub fn now(format: Option<String>) -> Result<String, Error> {
    let format = format.as_deref().unwrap_or(DEFAULT_NOW_FORMAT);

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid time format {:?}", format),
        ));
    }

    Ok(chrono::Utc::now().format(format).to_string())
}
