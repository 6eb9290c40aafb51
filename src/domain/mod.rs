//! Domain layer - Form submissions and their validation rules
//!
//! Submissions are transient: validated inline, never stored.

pub mod contact;
pub mod fields;
pub mod newsletter;

pub use contact::{ContactEcho, ContactSubmission};
pub use newsletter::NewsletterSignup;

/// Join validation messages into a single user-facing string
pub fn describe_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
