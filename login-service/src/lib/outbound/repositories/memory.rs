use std::collections::HashMap;

use crate::domain::login::models::User;
use crate::login::errors::LoginError;
use crate::login::ports::UserRepository;

/// In-memory user store.
///
/// Accounts are loaded once at construction and read-only afterwards, so
/// lookups need no synchronization.
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Build a repository from a fixed set of accounts.
    ///
    /// # Arguments
    /// * `users` - Accounts to serve, keyed by their username
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self { users }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<User>, LoginError> {
        Ok(self.users.get(username).cloned())
    }
}
