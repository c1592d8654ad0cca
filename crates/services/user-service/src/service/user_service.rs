//! User service - Handles user-related use cases.
//!
//! SOLID (SRP): Translates repository outcomes into application results.

use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{User, MSG_USER_NOT_FOUND};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService: Send + Sync {
    /// Store `user` under its own id, replacing any previous record
    fn create_user(&self, user: User) -> AppResult<()>;

    /// Get user by ID
    fn get_user(&self, id: &str) -> AppResult<User>;

    /// Store `user` under `id`, replacing any previous record
    fn update_user(&self, id: &str, user: User) -> AppResult<()>;

    /// Delete user by ID (absent ids are not an error)
    fn delete_user(&self, id: &str) -> AppResult<()>;

    /// List all users
    fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl UserService for UserManager {
    fn create_user(&self, user: User) -> AppResult<()> {
        tracing::debug!(id = %user.id, "Creating user");
        self.repo.create(user);
        Ok(())
    }

    fn get_user(&self, id: &str) -> AppResult<User> {
        tracing::debug!(id, "Reading user");
        self.repo.read(id).ok_or_not_found(MSG_USER_NOT_FOUND)
    }

    fn update_user(&self, id: &str, user: User) -> AppResult<()> {
        if id != user.id {
            tracing::debug!(id, body_id = %user.id, "Storing user under a key that differs from its id");
        } else {
            tracing::debug!(id, "Updating user");
        }
        self.repo.update(id, user);
        Ok(())
    }

    fn delete_user(&self, id: &str) -> AppResult<()> {
        tracing::debug!(id, "Deleting user");
        self.repo.delete(id);
        Ok(())
    }

    fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list();
        tracing::debug!(count = users.len(), "Listing users");
        Ok(users)
    }
}
