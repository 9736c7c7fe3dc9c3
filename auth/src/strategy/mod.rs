pub mod errors;
#[cfg(feature = "md5")]
pub mod md5;
pub mod plain;
pub mod scheme;

pub use errors::StrategyError;
#[cfg(feature = "md5")]
pub use md5::Md5Strategy;
pub use plain::PlainStrategy;
pub use scheme::Scheme;

/// Strategy for checking a supplied credential against a stored one.
///
/// Implementations are stateless and side-effect free. A credential that is
/// absent on either side never matches, not even when both are absent.
pub trait AuthStrategy: Send + Sync {
    /// Check a supplied credential against the stored one.
    ///
    /// # Arguments
    /// * `supplied` - Credential provided by the caller, if any
    /// * `stored` - Credential at rest, if any
    ///
    /// # Returns
    /// True if the supplied credential matches the stored one
    fn verify(&self, supplied: Option<&str>, stored: Option<&str>) -> bool;
}
