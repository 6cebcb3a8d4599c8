//! PostgreSQL implementations of the core store traits.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod receipt;
pub mod user;

pub use receipt::DbReceiptStore;
pub use user::UserRepository;

use riocaja_core::store::StoreError;
use sea_orm::{DbErr, SqlErr};

/// Maps a database error onto the store error the core understands.
pub(crate) fn store_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::UniqueViolation(detail),
        _ => StoreError::Backend(err.to_string()),
    }
}
