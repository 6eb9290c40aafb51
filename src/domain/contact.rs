//! Contact form submission.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::describe_errors;
use super::fields::{checkbox, required};

/// Contact form as posted from the contact section.
///
/// The only content rule is a minimum message length; nothing else about
/// the submission is checked.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "required")]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(deserialize_with = "required")]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[serde(deserialize_with = "required")]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(deserialize_with = "required")]
    #[schema(example = "Exam vouchers")]
    pub subject: String,
    /// At least 10 characters
    #[serde(deserialize_with = "required")]
    #[validate(length(min = 10, message = "Message is too short"))]
    #[schema(example = "Do you offer group discounts?", min_length = 10)]
    pub message: String,
    /// Privacy-policy checkbox (`on`, `true`, `1` or `yes`)
    #[serde(deserialize_with = "checkbox")]
    #[schema(value_type = String, example = "on")]
    pub privacy: bool,
}

/// Submitted values sent back for correction. Consent is not echoed.
#[derive(Debug, Serialize)]
pub struct ContactEcho<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl ContactSubmission {
    /// Apply the submission rules, returning the user-facing error text.
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| describe_errors(&e))
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn echo(&self) -> ContactEcho<'_> {
        ContactEcho {
            first_name: &self.first_name,
            last_name: &self.last_name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(message: &str) -> ContactSubmission {
        ContactSubmission {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Vouchers".to_string(),
            message: message.to_string(),
            privacy: true,
        }
    }

    #[test]
    fn test_short_message_is_rejected() {
        assert_eq!(submission("Too short").check().unwrap_err(), "Message is too short");
    }

    #[test]
    fn test_ten_characters_is_enough() {
        assert!(submission("0123456789").check().is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 9 characters, 18 bytes
        assert!(submission("ééééééééé").check().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(submission("irrelevant").full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_echo_omits_consent() {
        let value = serde_json::to_value(submission("Hello there").echo()).unwrap();
        assert_eq!(value["first_name"], "Ada");
        assert!(value.get("privacy").is_none());
    }
}
