use std::sync::Arc;

use auth::AuthStrategy;

use crate::config::AuthConfig;
use crate::login::errors::LoginError;
use crate::login::ports::UserRepository;

/// Domain service checking supplied credentials against stored accounts.
///
/// A thin composition point: resolve the account, delegate the comparison to
/// the injected strategy, return its verdict unchanged. Every call performs
/// a fresh lookup and a fresh strategy invocation.
pub struct LoginService<R, S>
where
    R: UserRepository + ?Sized,
    S: AuthStrategy + ?Sized,
{
    repository: Arc<R>,
    strategy: Arc<S>,
}

impl<R, S> LoginService<R, S>
where
    R: UserRepository + ?Sized,
    S: AuthStrategy + ?Sized,
{
    /// Create a new login service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account lookup implementation
    /// * `strategy` - Credential comparison to apply
    pub fn new(repository: Arc<R>, strategy: Arc<S>) -> Self {
        Self {
            repository,
            strategy,
        }
    }

    /// Check a supplied password for the named account.
    ///
    /// # Arguments
    /// * `username` - Account to authenticate
    /// * `password` - Password supplied by the caller
    ///
    /// # Returns
    /// True when the account exists and the supplied password matches its
    /// stored credential; false for unknown accounts and mismatches alike
    ///
    /// # Errors
    /// * `Lookup` - The account store could not be queried
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, LoginError> {
        let Some(user) = self.repository.find_by_username(username)? else {
            tracing::debug!(username = %username, "Login rejected, unknown username");
            return Ok(false);
        };

        Ok(self.strategy.verify(Some(password), user.password.as_deref()))
    }
}

impl<R> LoginService<R, dyn AuthStrategy>
where
    R: UserRepository,
{
    /// Build a login service with the strategy named in configuration.
    ///
    /// # Arguments
    /// * `config` - Authentication section of the loaded configuration
    /// * `repository` - Account lookup implementation
    ///
    /// # Errors
    /// * `Strategy` - The configured scheme is not available in this build
    pub fn from_config(config: &AuthConfig, repository: Arc<R>) -> Result<Self, LoginError> {
        let strategy: Arc<dyn AuthStrategy> = Arc::from(config.scheme.strategy()?);
        tracing::info!(scheme = ?config.scheme, "Authentication strategy configured");
        Ok(Self::new(repository, strategy))
    }
}
