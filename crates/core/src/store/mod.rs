//! Storage ports shared by the auth and receipt modules.
//!
//! The traits themselves live next to the services that use them
//! ([`crate::auth::CredentialStore`], [`crate::receipts::ReceiptStore`]);
//! this module holds their common error type and in-memory implementations.

pub mod memory;

use thiserror::Error;

/// Errors reported by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// The backend failed (connection, query, corrupt row).
    #[error("storage backend error: {0}")]
    Backend(String),
}
