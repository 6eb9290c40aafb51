//! Static content pages.
//!
//! Every page renders the single-page `index.html`; `active_section`
//! selects the section it scrolls to.

use axum::{extract::State, response::Html, routing::get, Router};
use minijinja::context;

use crate::api::extractors::PageRequest;
use crate::api::AppState;
use crate::config::Settings;
use crate::errors::AppResult;

pub const INDEX_TEMPLATE: &str = "index.html";

/// A fixed GET route and its page metadata.
#[derive(Debug)]
pub struct Page {
    pub path: &'static str,
    /// Used in log lines
    pub name: &'static str,
    pub section: Option<&'static str>,
    /// `None` builds the title from the site name and tagline
    pub title: Option<&'static str>,
    pub description: &'static str,
}

impl Page {
    pub fn title(&self, settings: &Settings) -> String {
        match self.title {
            Some(title) => title.to_string(),
            None => format!("{} - {}", settings.app_name, settings.app_description),
        }
    }
}

pub const PAGES: &[Page] = &[
    Page {
        path: "/",
        name: "homepage",
        section: None,
        title: None,
        description: "Get certified in Python programming with Python Institute's comprehensive courses and globally recognized certifications. From beginner to professional level Python training and certification.",
    },
    Page {
        path: "/courses",
        name: "courses page",
        section: Some("courses"),
        title: Some("Courses - Python Institute"),
        description: "Comprehensive Python courses designed to take you from a beginner to a certified professional. Each course builds on the previous one, creating a clear path to Python mastery.",
    },
    Page {
        path: "/certifications",
        name: "certifications page",
        section: Some("certifications"),
        title: Some("Certifications - Python Institute"),
        description: "Our industry-recognized certifications validate your Python skills at different proficiency levels, enhancing your career prospects and professional credibility.",
    },
    Page {
        path: "/roadmap",
        name: "roadmap page",
        section: Some("roadmap"),
        title: Some("Learning Roadmap - Python Institute"),
        description: "Follow our structured learning path from beginner to professional Python developer. This roadmap will guide you through each stage of your Python journey.",
    },
    Page {
        path: "/exam-info",
        name: "exam information page",
        section: Some("exam-info"),
        title: Some("Exam Information - Python Institute"),
        description: "Everything you need to know about our Python certification exams, from preparation to test-taking strategies.",
    },
    Page {
        path: "/faq",
        name: "FAQ page",
        section: Some("faq"),
        title: Some("FAQ - Python Institute"),
        description: "Find answers to common questions about Python Institute certifications and courses.",
    },
    Page {
        path: "/contact",
        name: "contact page",
        section: Some("contact"),
        title: Some("Contact Us - Python Institute"),
        description: "Have questions about our certification program or courses? We're here to help you on your Python journey.",
    },
];

/// Create one GET route per entry in [`PAGES`].
pub fn page_routes() -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(
            page.path,
            get(move |State(state): State<AppState>, request: PageRequest| {
                render_page(state, request, page)
            }),
        )
    })
}

async fn render_page(
    state: AppState,
    request: PageRequest,
    page: &'static Page,
) -> AppResult<Html<String>> {
    tracing::info!("Rendering {}", page.name);

    state.render(
        INDEX_TEMPLATE,
        context! {
            request => request,
            active_section => page.section,
            page_title => page.title(&state.settings),
            page_description => page.description,
        },
    )
}
