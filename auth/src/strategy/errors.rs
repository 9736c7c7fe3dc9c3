use thiserror::Error;

/// Error type for strategy configuration.
///
/// Raised when a scheme is resolved, never by a verification itself: a
/// missing digest primitive is an environment problem, not a bad password.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Digest algorithm {0} is not available in this build")]
    DigestUnavailable(&'static str),
}
