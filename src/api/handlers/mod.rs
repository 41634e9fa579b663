//! HTTP request handlers for API endpoints.

pub mod create_link;
pub mod error_page;
pub mod health;
pub mod redirect;

pub use create_link::create_link_handler;
pub use error_page::error_page_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
