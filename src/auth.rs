// ABOUTME: Password hashing and verification for the authentication boundary
// ABOUTME: Ensures stored credentials are never compared by plaintext equality
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password handling at the authentication boundary.
//!
//! The store itself is agnostic to what the `password_hash` field holds;
//! these helpers are the one place in the pipeline where plaintext meets
//! the stored hash. Verification happens inside bcrypt, which compares in
//! constant time. A transport layer must map a verification failure to the
//! same external response as [`crate::errors::StoreError::UserNotFound`]
//! so the two paths are indistinguishable to clients.

use bcrypt::BcryptError;

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Returns an error if bcrypt fails to produce a hash (e.g. the cost
/// parameters are rejected).
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed stored hash verifies as `false` rather than erroring — the
/// caller's uniform invalid-credentials response covers that case too.
#[must_use]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert_ne!(hash, "correct horse");
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }
}
