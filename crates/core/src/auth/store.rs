//! Persistence port for user identity records.

use async_trait::async_trait;

use super::types::{NewUser, UserRecord};
use crate::store::StoreError;

/// Storage of user identity records.
///
/// Emails reaching the store are already normalized. Implementations must
/// enforce email uniqueness themselves and report a clash on insert as
/// [`StoreError::UniqueViolation`].
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks a user up by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Persists a new user and returns it with its generated identifier.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Atomically adds one to the failed-login counter of `email`.
    async fn increment_failed_logins(&self, email: &str) -> Result<(), StoreError>;

    /// Returns every user, oldest registration first.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
}
