//! Email tokenization
//!
//! Emails are replaced with a one-way token derived from a SHA-256 digest of
//! the original address. The same input always yields the same token.

use super::rules::{ANON_EMAIL_DOMAIN, EMAIL_TOKEN_LEN};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a value
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Derive the anonymized email for an original address
///
/// The address is always hashed, including one that is already in the
/// anonymized domain, so no part of the input survives.
///
/// # Examples
///
/// ```
/// use registry_guard::anonymization::anonymize_email;
///
/// let token = anonymize_email("ada@example.com");
/// assert!(token.ends_with("@anon.test"));
/// assert_eq!(token, anonymize_email("ada@example.com"));
/// assert_ne!(token, anonymize_email(&token));
/// ```
pub fn anonymize_email(email: &str) -> String {
    let digest = sha256_hex(email);
    format!("{}@{}", &digest[..EMAIL_TOKEN_LEN], ANON_EMAIL_DOMAIN)
}
