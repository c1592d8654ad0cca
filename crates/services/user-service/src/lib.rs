//! User Service Library
//!
//! This crate provides user management on top of an in-memory repository.
//! The HTTP API embeds it; nothing here knows about transports.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::InMemoryUserStore;
use crate::service::{UserManager, UserService};

/// Build the user service backed by a fresh in-memory store.
pub fn in_memory() -> Arc<dyn UserService> {
    let user_repo = Arc::new(InMemoryUserStore::new());
    Arc::new(UserManager::new(user_repo))
}
