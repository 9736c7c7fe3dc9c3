use crate::domain::login::models::User;
use crate::login::errors::LoginError;

/// Port for resolving stored user accounts.
pub trait UserRepository: Send + Sync {
    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Lookup` - The backing store could not be queried
    fn find_by_username(&self, username: &str) -> Result<Option<User>, LoginError>;
}
