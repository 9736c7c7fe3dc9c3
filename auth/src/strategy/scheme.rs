use serde::Deserialize;

use super::errors::StrategyError;
#[cfg(feature = "md5")]
use super::md5::Md5Strategy;
use super::plain::PlainStrategy;
use super::AuthStrategy;

/// Credential verification scheme, selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Byte-for-byte comparison against the stored password
    Plain,
    /// Comparison against a Base64-encoded MD5 digest
    Md5,
}

impl Scheme {
    /// Resolve the scheme to a strategy instance.
    ///
    /// # Returns
    /// Boxed strategy implementing the selected comparison
    ///
    /// # Errors
    /// * `DigestUnavailable` - The scheme needs a digest primitive this
    ///   build does not carry
    pub fn strategy(&self) -> Result<Box<dyn AuthStrategy>, StrategyError> {
        match self {
            Scheme::Plain => Ok(Box::new(PlainStrategy::new())),
            #[cfg(feature = "md5")]
            Scheme::Md5 => Ok(Box::new(Md5Strategy::new())),
            #[cfg(not(feature = "md5"))]
            Scheme::Md5 => Err(StrategyError::DigestUnavailable("md5")),
        }
    }
}
