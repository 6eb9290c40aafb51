//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI in debug mode only.

use utoipa::OpenApi;

use crate::api::handlers::{forms, health};
use crate::domain::{ContactSubmission, NewsletterSignup};

/// OpenAPI documentation for the site's form and JSON endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Institute Site",
        version = "0.1.0",
        description = "Form endpoints and health probe of the institute marketing site",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        forms::contact_form,
        forms::newsletter_signup,
        health::health_check,
    ),
    components(
        schemas(
            ContactSubmission,
            NewsletterSignup,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Forms", description = "Contact and newsletter submissions"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
