//! Application settings loaded from environment variables.

use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use super::constants::{
    DEFAULT_APP_DESCRIPTION, DEFAULT_APP_NAME, DEFAULT_CERTIFICATION_TYPES,
    DEFAULT_CONTACT_ADDRESS, DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_PHONE, DEFAULT_COURSE_LEVELS,
    DEFAULT_ENV_FILE, DEFAULT_FACEBOOK_URL, DEFAULT_GITHUB_URL, DEFAULT_LINKEDIN_URL,
    DEFAULT_META_AUTHOR, DEFAULT_META_KEYWORDS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_STATIC_DIR, DEFAULT_TEMPLATE_DIR, DEFAULT_TWITTER_URL, DEFAULT_YOUTUBE_URL,
};

/// Site settings, built once at startup and shared read-only afterwards.
///
/// Every field has a static default. Environment keys are the upper-case
/// field names (`APP_NAME`, `CONTACT_EMAIL`, ...) and are case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub app_name: String,
    pub app_description: String,
    pub debug: bool,

    pub host: String,
    pub port: u16,

    pub template_dir: PathBuf,
    pub static_dir: PathBuf,

    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,

    pub twitter_url: Option<String>,
    pub facebook_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub youtube_url: Option<String>,

    pub meta_keywords: String,
    pub meta_author: String,

    pub course_levels: Vec<String>,
    pub certification_types: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            app_description: DEFAULT_APP_DESCRIPTION.to_string(),
            debug: false,
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            contact_address: DEFAULT_CONTACT_ADDRESS.to_string(),
            twitter_url: Some(DEFAULT_TWITTER_URL.to_string()),
            facebook_url: Some(DEFAULT_FACEBOOK_URL.to_string()),
            linkedin_url: Some(DEFAULT_LINKEDIN_URL.to_string()),
            github_url: Some(DEFAULT_GITHUB_URL.to_string()),
            youtube_url: Some(DEFAULT_YOUTUBE_URL.to_string()),
            meta_keywords: DEFAULT_META_KEYWORDS.to_string(),
            meta_author: DEFAULT_META_AUTHOR.to_string(),
            course_levels: to_owned_list(DEFAULT_COURSE_LEVELS),
            certification_types: to_owned_list(DEFAULT_CERTIFICATION_TYPES),
        }
    }
}

impl Settings {
    /// Load settings from the process environment, then the override file.
    ///
    /// `env_file` defaults to `.env` in the working directory. The process
    /// environment always wins over the file. Nothing here is fatal: a value
    /// that cannot be parsed is logged and replaced by its default.
    pub fn load(env_file: Option<&Path>) -> Self {
        Self::load_with(env_file, |key| env::var(key).ok())
    }

    /// [`Settings::load`] with the process environment replaced by `env`.
    pub fn load_with<E>(env_file: Option<&Path>, env: E) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let file_vars = match env_file {
            Some(path) => read_env_file(path, true),
            None => read_env_file(Path::new(DEFAULT_ENV_FILE), false),
        };

        Self::from_lookup(|key| env(key).or_else(|| file_vars.get(key).cloned()))
    }

    /// Build settings from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            app_description: lookup("APP_DESCRIPTION").unwrap_or(defaults.app_description),
            debug: lookup("DEBUG")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.debug),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "PORT", defaults.port),
            template_dir: lookup("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            contact_email: lookup("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            contact_phone: lookup("CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            contact_address: lookup("CONTACT_ADDRESS").unwrap_or(defaults.contact_address),
            twitter_url: optional(&lookup, "TWITTER_URL", defaults.twitter_url),
            facebook_url: optional(&lookup, "FACEBOOK_URL", defaults.facebook_url),
            linkedin_url: optional(&lookup, "LINKEDIN_URL", defaults.linkedin_url),
            github_url: optional(&lookup, "GITHUB_URL", defaults.github_url),
            youtube_url: optional(&lookup, "YOUTUBE_URL", defaults.youtube_url),
            meta_keywords: lookup("META_KEYWORDS").unwrap_or(defaults.meta_keywords),
            meta_author: lookup("META_AUTHOR").unwrap_or(defaults.meta_author),
            course_levels: list(&lookup, "COURSE_LEVELS", defaults.course_levels),
            certification_types: list(
                &lookup,
                "CERTIFICATION_TYPES",
                defaults.certification_types,
            ),
        }
    }

    /// Warn about (and try to create) declared directories that are missing.
    pub fn prepare_directories(&self) {
        for (label, dir) in [("Template", &self.template_dir), ("Static", &self.static_dir)] {
            if dir.exists() {
                continue;
            }

            tracing::warn!("{} directory does not exist: {}", label, dir.display());
            match fs::create_dir_all(dir) {
                Ok(()) => tracing::info!("Created {} directory: {}", label.to_lowercase(), dir.display()),
                Err(e) => tracing::warn!("Could not create {}: {}", dir.display(), e),
            }
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read `KEY=value` pairs from an override file without touching the
/// process environment.
fn read_env_file(path: &Path, explicit: bool) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    if !path.exists() {
        if explicit {
            tracing::warn!("Env file not found, using environment only: {}", path.display());
        }
        return vars;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!("Could not read env file {}: {}", path.display(), e);
            return vars;
        }
    };

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_env_line(line) {
            Some((key, value)) => {
                vars.insert(key, value);
            }
            None => {
                tracing::warn!("Skipping malformed line {} in {}", index + 1, path.display());
            }
        }
    }

    vars
}

/// `dotenvy` handles quoting, escapes and `export`. Unquoted values with
/// spaces, which it rejects, are taken as-is after the first `=`.
fn parse_env_line(line: &str) -> Option<(String, String)> {
    if let Some(Ok(pair)) = dotenvy::from_read_iter(line.as_bytes()).next() {
        return Some(pair);
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let key = key.strip_prefix("export ").unwrap_or(key).trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let value = value.split(" #").next().unwrap_or_default().trim();
    Some((key.to_string(), value.to_string()))
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid value for {} ({:?}): {}; using default {}", key, raw, e, default);
            default
        }),
        None => default,
    }
}

/// An empty value switches an optional link off.
fn optional<F>(lookup: &F, key: &str, default: Option<String>) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if raw.trim().is_empty() => None,
        Some(raw) => Some(raw),
        None => default,
    }
}

/// Lists are given either as a JSON array or as comma-separated values.
fn list<F>(lookup: &F, key: &str, default: Vec<String>) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).unwrap_or_else(|e| {
            tracing::warn!("Invalid list for {}: {}; using defaults", key, e);
            default
        });
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
