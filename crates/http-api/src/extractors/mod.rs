//! Custom request extractors.

pub mod json_body;
pub mod query_id;

pub use json_body::JsonBody;
pub use query_id::QueryId;
