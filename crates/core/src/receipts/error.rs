//! Receipt error types.

use riocaja_shared::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during receipt operations.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// No receipt with this transaction number in the caller's scope.
    #[error("receipt {0} not found")]
    NotFound(String),

    /// The transaction number is already taken in the caller's scope.
    #[error("a receipt with transaction number {0} already exists")]
    DuplicateTransaction(String),

    /// Date is not a `dd/mm/yyyy` (or `dd-mm-yyyy`) calendar date.
    #[error("invalid date {0:?}, expected dd/mm/yyyy")]
    InvalidDate(String),

    /// `valor_total` is out of range or too precise.
    #[error("invalid total value {0}")]
    InvalidAmount(String),

    /// Storage failure or arithmetic overflow.
    #[error("unexpected receipt failure: {0}")]
    Unexpected(String),
}

impl From<StoreError> for ReceiptError {
    fn from(err: StoreError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        match err {
            ReceiptError::NotFound(_) => Self::NotFound("receipt not found".to_string()),
            ReceiptError::DuplicateTransaction(number) => Self::DuplicateTransaction(number),
            e @ (ReceiptError::InvalidDate(_) | ReceiptError::InvalidAmount(_)) => {
                Self::Validation(e.to_string())
            }
            ReceiptError::Unexpected(detail) => Self::Database(detail),
        }
    }
}
