use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for login operations
///
/// An unknown username is not represented here: the service reports it as a
/// plain rejection so callers cannot tell it apart from a wrong password.
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    #[error("Strategy configuration error: {0}")]
    Strategy(#[from] auth::StrategyError),

    #[error("User lookup failed: {0}")]
    Lookup(String),
}
