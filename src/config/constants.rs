//! Application-wide constants
//!
//! Centralized location for default settings and fixed page copy.

// =============================================================================
// Application
// =============================================================================

/// Default site name
pub const DEFAULT_APP_NAME: &str = "Python Institute";

/// Default site tagline
pub const DEFAULT_APP_DESCRIPTION: &str = "Professional Python Certification & Training Courses";

/// Fixed suffix of page titles; it does not follow `APP_NAME`
pub const PAGE_TITLE_SUFFIX: &str = "Python Institute";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default override file read at startup
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Directories
// =============================================================================

/// Default template directory (relative to the working directory)
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Default static asset directory (relative to the working directory)
pub const DEFAULT_STATIC_DIR: &str = "static";

/// URL prefix static assets are mounted under
pub const STATIC_URL_PREFIX: &str = "/static";

// =============================================================================
// Contact & Social
// =============================================================================

pub const DEFAULT_CONTACT_EMAIL: &str = "info@pythoninstitute.org";
pub const DEFAULT_CONTACT_PHONE: &str = "+1 (123) 456-7890";
pub const DEFAULT_CONTACT_ADDRESS: &str =
    "1234 Python Way, Coding District, San Francisco, CA 94107";

pub const DEFAULT_TWITTER_URL: &str = "https://twitter.com/pythoninstitute";
pub const DEFAULT_FACEBOOK_URL: &str = "https://facebook.com/pythoninstitute";
pub const DEFAULT_LINKEDIN_URL: &str = "https://linkedin.com/company/pythoninstitute";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/pythoninstitute";
pub const DEFAULT_YOUTUBE_URL: &str = "https://youtube.com/pythoninstitute";

// =============================================================================
// SEO
// =============================================================================

pub const DEFAULT_META_KEYWORDS: &str =
    "Python, certification, programming, training, PCEP, PCAP, PCPP";
pub const DEFAULT_META_AUTHOR: &str = "Python Institute";

// =============================================================================
// Catalogue
// =============================================================================

/// Course levels, in progression order
pub const DEFAULT_COURSE_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced", "Expert"];

/// Certification tracks, in progression order
pub const DEFAULT_CERTIFICATION_TYPES: &[&str] = &["PCEP™", "PCAP™", "PCPP1™", "PCPP2™"];

// =============================================================================
// Responses
// =============================================================================

/// Header carrying the request processing time in seconds
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Liveness probe path; its responses carry no timing header
pub const HEALTH_PATH: &str = "/health";

/// Message shown on the catch-all error page outside debug mode
pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error";

/// Gzip is only applied to bodies at least this large
pub const COMPRESSION_MIN_BYTES: u16 = 1000;
