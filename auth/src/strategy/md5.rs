use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use md5::Digest;
use md5::Md5;

use super::AuthStrategy;

/// MD5 digest credential comparison.
///
/// Expects the stored credential to be the Base64 encoding of the MD5 digest
/// of the supplied password's raw bytes. Kept for user stores that still
/// hold such hashes; new stores should not create them.
pub struct Md5Strategy;

impl Md5Strategy {
    /// Create a new MD5 comparison strategy.
    pub fn new() -> Self {
        Self
    }

    /// Base64-encoded MD5 digest of a password, as held by legacy stores.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to digest
    ///
    /// # Returns
    /// Base64 string (standard alphabet, padded) of the 16-byte digest
    pub fn digest(password: &str) -> String {
        let mut digest = Md5::new();
        digest.update(password.as_bytes());
        STANDARD.encode(digest.finalize())
    }
}

impl Default for Md5Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStrategy for Md5Strategy {
    fn verify(&self, supplied: Option<&str>, stored: Option<&str>) -> bool {
        let (Some(supplied), Some(stored)) = (supplied, stored) else {
            return false;
        };
        Self::digest(supplied) == stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_known_vector() {
        // MD5("") = d41d8cd98f00b204e9800998ecf8428e
        assert_eq!(Md5Strategy::digest(""), "1B2M2Y8AsgTpgAmY7PhCfg==");
    }

    #[test]
    fn test_digested_credential_matches() {
        let strategy = Md5Strategy::new();
        let stored = Md5Strategy::digest("supplied_password");
        assert!(strategy.verify(Some("supplied_password"), Some(&stored)));
    }

    #[test]
    fn test_plain_stored_credential_does_not_match() {
        let strategy = Md5Strategy::new();
        assert!(!strategy.verify(Some("supplied_password"), Some("stored_password")));
    }

    #[test]
    fn test_digest_of_other_password_does_not_match() {
        let strategy = Md5Strategy::new();
        let stored = Md5Strategy::digest("other_password");
        assert!(!strategy.verify(Some("supplied_password"), Some(&stored)));
    }

    #[test]
    fn test_absent_credentials_never_match() {
        let strategy = Md5Strategy::new();
        assert!(!strategy.verify(None, None));
        assert!(!strategy.verify(Some("supplied_password"), None));
        assert!(!strategy.verify(None, Some("1B2M2Y8AsgTpgAmY7PhCfg==")));
    }
}
