//! Receipt records and scoped access to them.
//!
//! Every operation on [`ReceiptRepository`] takes a [`crate::auth::Scope`];
//! there is no unscoped entry point.

pub mod date;
pub mod error;
pub mod repository;
pub mod store;
pub mod types;


pub use date::ReceiptDate;
pub use error::ReceiptError;
pub use repository::ReceiptRepository;
pub use store::{ReceiptFilter, ReceiptStore};
pub use types::{MAX_TOTAL_SCALE, MAX_TOTAL_VALUE, NewReceipt, Receipt, ReceiptData};
