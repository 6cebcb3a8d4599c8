//! In-memory stores for tests and local experiments.
//!
//! They enforce the same uniqueness keys as the PostgreSQL schema so the
//! services behave identically on top of either.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use riocaja_shared::types::{ReceiptId, UserId};

use super::StoreError;
use crate::auth::{CredentialStore, NewUser, UserRecord};
use crate::receipts::{NewReceipt, Receipt, ReceiptFilter, ReceiptStore};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
}

/// Users kept in a vector, in registration order.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(lock(&self.users)?.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = lock(&self.users)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("users_email_key".to_string()));
        }

        let record = UserRecord {
            id: UserId::new(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            status: user.status,
            registered_at: user.registered_at,
            failed_login_attempts: 0,
            recovery_token: None,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn increment_failed_logins(&self, email: &str) -> Result<(), StoreError> {
        if let Some(user) = lock(&self.users)?.iter_mut().find(|u| u.email == email) {
            user.failed_login_attempts = user.failed_login_attempts.saturating_add(1);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(lock(&self.users)?.clone())
    }
}

/// Receipts kept in a vector, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: Mutex<Vec<Receipt>>,
}

impl InMemoryReceiptStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored receipts across all owners.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.receipts)?.len())
    }

    /// Whether the store holds no receipts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(lock(&self.receipts)?.is_empty())
    }

    fn matching(&self, filter: &ReceiptFilter) -> Result<Vec<Receipt>, StoreError> {
        // Reverse first so equal timestamps keep newest-inserted first.
        let mut found: Vec<Receipt> = lock(&self.receipts)?
            .iter()
            .rev()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn find(&self, filter: &ReceiptFilter) -> Result<Vec<Receipt>, StoreError> {
        self.matching(filter)
    }

    async fn find_one(&self, filter: &ReceiptFilter) -> Result<Option<Receipt>, StoreError> {
        Ok(self.matching(filter)?.into_iter().next())
    }

    async fn insert(&self, receipt: NewReceipt) -> Result<Receipt, StoreError> {
        let mut receipts = lock(&self.receipts)?;
        let clash = receipts.iter().any(|r| {
            r.owner == receipt.owner
                && r.data.transaction_number == receipt.data.transaction_number
        });
        if clash {
            return Err(StoreError::UniqueViolation(
                "receipts_owner_transaction_key".to_string(),
            ));
        }

        let stored = Receipt {
            id: ReceiptId::new(),
            data: receipt.data,
            owner: receipt.owner,
            created_at: receipt.created_at,
        };
        receipts.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: ReceiptId) -> Result<bool, StoreError> {
        let mut receipts = lock(&self.receipts)?;
        let before = receipts.len();
        receipts.retain(|r| r.id != id);
        Ok(receipts.len() < before)
    }
}
