//! Scoped receipt operations.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::date::ReceiptDate;
use super::error::ReceiptError;
use super::store::{ReceiptFilter, ReceiptStore};
use super::types::{MAX_TOTAL_SCALE, MAX_TOTAL_VALUE, NewReceipt, Receipt, ReceiptData};
use crate::auth::Scope;
use crate::store::StoreError;

/// CRUD over receipts, narrowed by a [`Scope`] on every call.
///
/// Under [`Scope::OwnedBy`] a receipt owned by someone else behaves exactly
/// like a receipt that does not exist.
#[derive(Clone)]
pub struct ReceiptRepository {
    store: Arc<dyn ReceiptStore>,
}

impl std::fmt::Debug for ReceiptRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptRepository").finish_non_exhaustive()
    }
}

impl ReceiptRepository {
    /// Creates a repository over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// All receipts in scope, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Unexpected` on storage failure.
    pub async fn list_all(&self, scope: Scope) -> Result<Vec<Receipt>, ReceiptError> {
        Ok(self.store.find(&ReceiptFilter::for_scope(scope)).await?)
    }

    /// Receipts in scope for one date, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Unexpected` on storage failure.
    pub async fn list_by_date(
        &self,
        scope: Scope,
        date: &ReceiptDate,
    ) -> Result<Vec<Receipt>, ReceiptError> {
        let filter = ReceiptFilter::for_scope(scope).with_date(date.as_str());
        Ok(self.store.find(&filter).await?)
    }

    /// The receipt with this transaction number, if it is in scope.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Unexpected` on storage failure.
    pub async fn find_by_transaction(
        &self,
        scope: Scope,
        number: &str,
    ) -> Result<Option<Receipt>, ReceiptError> {
        let filter = ReceiptFilter::for_scope(scope).with_transaction_number(number);
        Ok(self.store.find_one(&filter).await?)
    }

    /// Stores a receipt owned per `scope`, stamped with the current time.
    ///
    /// Uniqueness is checked within `scope`: a restricted user only clashes
    /// with their own receipts, an unrestricted caller with any receipt. The
    /// store's own constraint settles concurrent inserts.
    ///
    /// # Errors
    ///
    /// - `ReceiptError::InvalidDate` if `fecha` is not a calendar date.
    /// - `ReceiptError::InvalidAmount` if `valor_total` is out of bounds.
    /// - `ReceiptError::DuplicateTransaction` if the number is taken in scope.
    pub async fn create(&self, scope: Scope, mut data: ReceiptData) -> Result<Receipt, ReceiptError> {
        data.date = ReceiptDate::parse(&data.date)?.as_str().to_string();
        check_total_value(&data)?;
        let number = data.transaction_number.clone();

        if self.find_by_transaction(scope, &number).await?.is_some() {
            debug!(transaction_number = %number, "Duplicate transaction rejected by pre-check");
            return Err(ReceiptError::DuplicateTransaction(number));
        }

        let new_receipt = NewReceipt {
            data,
            owner: scope.owner(),
            created_at: Utc::now(),
        };

        match self.store.insert(new_receipt).await {
            Ok(receipt) => {
                info!(
                    receipt_id = %receipt.id,
                    transaction_number = %number,
                    "Receipt stored"
                );
                Ok(receipt)
            }
            Err(StoreError::UniqueViolation(_)) => Err(ReceiptError::DuplicateTransaction(number)),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the in-scope receipt with this transaction number.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt resolves in scope.
    pub async fn delete(&self, scope: Scope, number: &str) -> Result<(), ReceiptError> {
        let receipt = self
            .find_by_transaction(scope, number)
            .await?
            .ok_or_else(|| ReceiptError::NotFound(number.to_string()))?;

        if !self.store.delete_by_id(receipt.id).await? {
            return Err(ReceiptError::NotFound(number.to_string()));
        }

        info!(receipt_id = %receipt.id, transaction_number = %number, "Receipt deleted");
        Ok(())
    }
}

fn check_total_value(data: &ReceiptData) -> Result<(), ReceiptError> {
    let value = data.total_value;
    if value.abs() >= MAX_TOTAL_VALUE || value.normalize().scale() > MAX_TOTAL_SCALE {
        return Err(ReceiptError::InvalidAmount(value.to_string()));
    }
    Ok(())
}
