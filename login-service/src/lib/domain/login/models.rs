use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::login::errors::UserIdError;

/// User account entity.
///
/// Holds the stored credential consulted during login. Accounts without a
/// stored password exist and can never authenticate with one.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a fresh identifier.
    ///
    /// # Arguments
    /// * `username` - Account name used as the lookup key
    /// * `password` - Stored credential, if the account has one
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password,
            created_at: Utc::now(),
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
