//! API middleware.

mod error_pages;
mod panic;
mod timing;

pub use error_pages::render_error_pages;
pub use panic::panic_response;
pub use timing::process_time;
