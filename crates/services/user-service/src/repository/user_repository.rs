//! In-memory user repository.

use dashmap::DashMap;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method is atomic on its own. There is no transaction across
/// calls: writes are last-writer-wins per key.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite the record stored at `user.id`
    fn create(&self, user: User);

    /// Current record for `id`, if any
    fn read(&self, id: &str) -> Option<User>;

    /// Insert or overwrite the record stored at `id`.
    ///
    /// The record is keyed by `id`, not by `user.id`, so the two may differ.
    fn update(&self, id: &str, user: User);

    /// Remove the record for `id`; absent ids are a no-op
    fn delete(&self, id: &str);

    /// All stored records in unspecified order
    fn list(&self) -> Vec<User>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Concrete implementation of UserRepository over a sharded concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: DashMap<String, User>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl UserRepository for InMemoryUserStore {
    fn create(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    fn read(&self, id: &str) -> Option<User> {
        // Clone out so no shard guard outlives the call
        self.users.get(id).map(|entry| entry.value().clone())
    }

    fn update(&self, id: &str, user: User) {
        self.users.insert(id.to_string(), user);
    }

    fn delete(&self, id: &str) {
        self.users.remove(id);
    }

    fn list(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
