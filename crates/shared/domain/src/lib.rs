//! Domain layer - Core entities and shared constants.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Both the user service and the HTTP API build on the types defined here.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::User;
