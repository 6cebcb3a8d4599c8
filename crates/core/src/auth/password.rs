//! Password digests with Argon2id.
//!
//! The digest is an opaque PHC string; callers only ever hash or verify.
//! Argon2 is deliberately slow, so the async wrappers move the work onto the
//! blocking thread pool.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// Verification failed for a reason other than a wrong password.
    #[error("failed to verify password: {0}")]
    Verify(String),

    /// Stored digest is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,

    /// The blocking task did not complete.
    #[error("password task failed: {0}")]
    Task(String),
}

/// Hashes a password using Argon2id with a random salt.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if hashing fails.
///
/// # Example
///
/// ```
/// use riocaja_core::auth::hash_password;
///
/// let digest = hash_password("correct horse").unwrap();
/// assert!(digest.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verifies a password against a stored digest.
///
/// A wrong password is `Ok(false)`, not an error.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the digest cannot be parsed.
///
/// # Example
///
/// ```
/// use riocaja_core::auth::{hash_password, verify_password};
///
/// let digest = hash_password("correct horse").unwrap();
/// assert!(verify_password("correct horse", &digest).unwrap());
/// assert!(!verify_password("battery staple", &digest).unwrap());
/// ```
pub fn verify_password(password: &str, digest: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(digest).map_err(|_| PasswordError::InvalidHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::Verify(e.to_string())),
    }
}

/// [`hash_password`] on the blocking pool.
///
/// # Errors
///
/// Propagates hashing failures, or `PasswordError::Task` if the task panicked.
pub async fn hash_password_async(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| PasswordError::Task(e.to_string()))?
}

/// [`verify_password`] on the blocking pool.
///
/// # Errors
///
/// Propagates verification failures, or `PasswordError::Task` if the task panicked.
pub async fn verify_password_async(password: String, digest: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &digest))
        .await
        .map_err(|e| PasswordError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_phc_argon2id() {
        let digest = hash_password("receipts-2025").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("receipts-2025"));
    }

    #[test]
    fn test_salt_makes_digests_differ() {
        assert_ne!(
            hash_password("same-password").unwrap(),
            hash_password("same-password").unwrap()
        );
    }

    #[test]
    fn test_invalid_hash_format() {
        let result = verify_password("password", "plaintext-not-a-digest");
        assert!(matches!(result, Err(PasswordError::InvalidHash)));
    }

    #[tokio::test]
    async fn test_async_wrappers_agree() {
        let digest = hash_password_async("cajero123".to_string()).await.unwrap();

        assert!(
            verify_password_async("cajero123".to_string(), digest.clone())
                .await
                .unwrap()
        );
        assert!(
            !verify_password_async("cajero124".to_string(), digest)
                .await
                .unwrap()
        );
    }
}
