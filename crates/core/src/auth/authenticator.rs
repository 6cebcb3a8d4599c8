//! Registration and password login.

use std::sync::Arc;

use chrono::Utc;
use riocaja_shared::{Role, UserStatus, types::UserId};
use tracing::{info, warn};

use super::error::AuthError;
use super::password::{hash_password_async, verify_password_async};
use super::store::CredentialStore;
use super::types::{NewUser, UserProfile};
use crate::store::StoreError;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Normalizes an email for storage and lookup.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Verifies passwords against stored digests and tracks failed attempts.
#[derive(Clone)]
pub struct PasswordAuthenticator {
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for PasswordAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordAuthenticator").finish_non_exhaustive()
    }
}

impl PasswordAuthenticator {
    /// Creates an authenticator over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Registers a new active user with a zero failed-login counter.
    ///
    /// The duplicate check runs before the password rule, so a taken email
    /// is reported even when the password is also too short.
    ///
    /// # Errors
    ///
    /// - `AuthError::DuplicateIdentity` if the email is taken, including when
    ///   a concurrent registration wins the race to the store.
    /// - `AuthError::WeakCredential` if the password is shorter than
    ///   [`MIN_PASSWORD_LENGTH`].
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<UserId, AuthError> {
        let email = normalize_email(email);

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateIdentity);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakCredential {
                min_length: MIN_PASSWORD_LENGTH,
            });
        }

        let password_hash = hash_password_async(password.to_owned()).await?;

        let new_user = NewUser {
            name: name.trim().to_string(),
            email,
            password_hash,
            role,
            status: UserStatus::Active,
            registered_at: Utc::now(),
        };

        match self.store.insert(new_user).await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "User registered");
                Ok(user.id)
            }
            Err(StoreError::UniqueViolation(_)) => Err(AuthError::DuplicateIdentity),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks an email/password pair.
    ///
    /// A wrong password bumps the stored failed-login counter. A correct one
    /// leaves the counter untouched; nothing here resets it or locks the
    /// account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthFailure` for an unknown email or a wrong
    /// password alike.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let email = normalize_email(email);

        let Some(user) = self.store.find_by_email(&email).await? else {
            info!("Login attempt for unknown email");
            return Err(AuthError::AuthFailure);
        };

        let matches = verify_password_async(password.to_owned(), user.password_hash.clone()).await?;
        if !matches {
            self.store.increment_failed_logins(&email).await?;
            warn!(user_id = %user.id, "Failed login attempt - invalid password");
            return Err(AuthError::AuthFailure);
        }

        info!(user_id = %user.id, "User authenticated");
        Ok(user.into())
    }

    /// Lists every user without their digests.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unexpected` on storage failure.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, AuthError> {
        let users = self.store.list().await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }
}
