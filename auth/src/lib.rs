//! Credential verification library
//!
//! Provides reusable credential checking strategies for services that
//! compare a supplied password against a stored one:
//! - Plain text comparison
//! - MD5 digest comparison (Base64 encoded, for legacy user stores)
//!
//! Each service selects a strategy at configuration time and injects it into
//! its own login flow. Strategies are stateless and interchangeable; adding
//! a scheme means implementing the same two-operand contract.
//!
//! # Examples
//!
//! ## Plain comparison
//! ```
//! use auth::AuthStrategy;
//! use auth::PlainStrategy;
//!
//! let strategy = PlainStrategy::new();
//! assert!(strategy.verify(Some("secret"), Some("secret")));
//! assert!(!strategy.verify(Some("secret"), None));
//! ```
//!
//! ## Configuration-time selection
//! ```
//! use auth::AuthStrategy;
//! use auth::Scheme;
//!
//! let strategy = Scheme::Plain.strategy().unwrap();
//! assert!(strategy.verify(Some("secret"), Some("secret")));
//! ```

pub mod strategy;

// Re-export commonly used items
pub use strategy::errors::StrategyError;
#[cfg(feature = "md5")]
pub use strategy::md5::Md5Strategy;
pub use strategy::plain::PlainStrategy;
pub use strategy::scheme::Scheme;
pub use strategy::AuthStrategy;
