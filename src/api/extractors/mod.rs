//! Custom extractors.

mod form;
mod page_request;

pub use form::HtmlForm;
pub use page_request::PageRequest;
