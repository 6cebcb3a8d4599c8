//! Persistence port for receipts.

use async_trait::async_trait;
use riocaja_shared::types::{ReceiptId, UserId};

use super::types::{NewReceipt, Receipt};
use crate::auth::Scope;
use crate::store::StoreError;

/// Conjunction of equality filters over receipts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptFilter {
    /// Required owner, or any owner when `None`.
    pub owner: Option<UserId>,
    /// Required canonical date.
    pub date: Option<String>,
    /// Required transaction number.
    pub transaction_number: Option<String>,
}

impl ReceiptFilter {
    /// Filter that admits exactly what `scope` admits.
    #[must_use]
    pub const fn for_scope(scope: Scope) -> Self {
        Self {
            owner: scope.owner(),
            date: None,
            transaction_number: None,
        }
    }

    /// Narrows to one date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Narrows to one transaction number.
    #[must_use]
    pub fn with_transaction_number(mut self, number: impl Into<String>) -> Self {
        self.transaction_number = Some(number.into());
        self
    }

    /// Whether `receipt` passes every filter.
    #[must_use]
    pub fn matches(&self, receipt: &Receipt) -> bool {
        self.owner.is_none_or(|owner| receipt.owner == Some(owner))
            && self
                .date
                .as_deref()
                .is_none_or(|date| receipt.data.date == date)
            && self
                .transaction_number
                .as_deref()
                .is_none_or(|number| receipt.data.transaction_number == number)
    }
}

/// Storage of receipts.
///
/// Implementations must reject, with [`StoreError::UniqueViolation`], an
/// insert whose transaction number already exists for the same owner, and
/// among ownerless receipts for an insert without owner.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Receipts matching `filter`, newest `created_at` first.
    async fn find(&self, filter: &ReceiptFilter) -> Result<Vec<Receipt>, StoreError>;

    /// The newest receipt matching `filter`.
    async fn find_one(&self, filter: &ReceiptFilter) -> Result<Option<Receipt>, StoreError>;

    /// Persists a receipt and returns it with its generated identifier.
    async fn insert(&self, receipt: NewReceipt) -> Result<Receipt, StoreError>;

    /// Deletes one receipt. Returns false if it was already gone.
    async fn delete_by_id(&self, id: ReceiptId) -> Result<bool, StoreError>;
}
