//! Daily closing reports.
//!
//! A closing report totals one day's receipts and breaks the total down by
//! transaction type. All arithmetic is exact decimal.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ReportAggregator;
pub use types::{ClosingReport, UNKNOWN_TYPE};
