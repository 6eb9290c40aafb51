//! Newsletter signup.

use std::borrow::Cow;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::describe_errors;
use super::fields::required;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewsletterSignup {
    /// Must contain both `@` and `.`
    #[serde(deserialize_with = "required")]
    #[validate(custom(function = "looks_like_email"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl NewsletterSignup {
    /// Apply the signup rule, returning the user-facing error text.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| describe_errors(&e))
    }
}

/// Deliberately loose: an `@` and a `.` anywhere in the string.
fn looks_like_email(email: &str) -> Result<(), ValidationError> {
    if email.contains('@') && email.contains('.') {
        return Ok(());
    }

    let mut err = ValidationError::new("email");
    err.message = Some(Cow::Borrowed("Invalid email address"));
    Err(err)
}
