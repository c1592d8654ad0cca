//! HTTP request handlers.

pub mod fallback_handler;
pub mod user_handler;

pub use fallback_handler::{method_not_allowed, unsupported_path};
pub use user_handler::user_routes;
