//! Form submission handlers.
//!
//! Rule failures are recovered here: the form is rendered again with an
//! error message and the submitted values so the visitor can correct them.

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::api::extractors::{HtmlForm, PageRequest};
use crate::api::handlers::pages::INDEX_TEMPLATE;
use crate::api::AppState;
use crate::domain::{ContactSubmission, NewsletterSignup};
use crate::errors::AppResult;

pub const CONTACT_SUCCESS_TEMPLATE: &str = "contact_success.html";

/// Handle a contact form submission
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Forms",
    request_body(
        content = ContactSubmission,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Confirmation page, or the contact section with an error", body = String, content_type = "text/html"),
        (status = 422, description = "A required field is missing or empty", body = String, content_type = "text/html")
    )
)]
pub async fn contact_form(
    State(state): State<AppState>,
    request: PageRequest,
    HtmlForm(form): HtmlForm<ContactSubmission>,
) -> AppResult<Html<String>> {
    tracing::info!(email = %form.email, "Contact form submission");

    match form.check() {
        Ok(()) => state.render(
            CONTACT_SUCCESS_TEMPLATE,
            context! {
                request => request,
                name => form.full_name(),
            },
        ),
        Err(message) => {
            tracing::error!("Error processing contact form: {}", message);
            state.render(
                INDEX_TEMPLATE,
                context! {
                    request => request,
                    active_section => "contact",
                    error => message,
                    form_data => form.echo(),
                },
            )
        }
    }
}

/// Handle a newsletter signup
#[utoipa::path(
    post,
    path = "/newsletter-signup",
    tag = "Forms",
    request_body(
        content = NewsletterSignup,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Home page with a success or error notice", body = String, content_type = "text/html"),
        (status = 422, description = "The email field is missing or empty", body = String, content_type = "text/html")
    )
)]
pub async fn newsletter_signup(
    State(state): State<AppState>,
    request: PageRequest,
    HtmlForm(form): HtmlForm<NewsletterSignup>,
) -> AppResult<Html<String>> {
    tracing::info!(email = %form.email, "Newsletter signup");

    let context = match form.check() {
        Ok(()) => context! {
            request => request,
            newsletter_success => true,
            newsletter_email => form.email,
        },
        Err(message) => {
            tracing::error!("Error processing newsletter signup: {}", message);
            context! {
                request => request,
                newsletter_error => message,
                newsletter_email => form.email,
            }
        }
    };

    state.render(INDEX_TEMPLATE, context)
}
