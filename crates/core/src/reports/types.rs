//! Report types.

use std::collections::BTreeMap;

use riocaja_shared::types::UserId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Summary key for receipts recorded without a transaction type.
///
/// Reconciliation downstream keys off this literal.
pub const UNKNOWN_TYPE: &str = "Desconocido";

/// One day's receipts, totalled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosingReport {
    /// Subtotal per transaction type.
    pub summary: BTreeMap<String, Decimal>,
    /// Sum of every receipt's total value.
    pub total: Decimal,
    /// Canonical `dd/mm/yyyy` date the report covers.
    pub date: String,
    /// Number of receipts included.
    pub count: usize,
    /// Owner the report was narrowed to; `None` for unrestricted callers.
    #[serde(rename = "usuario_id")]
    pub owner: Option<UserId>,
}

impl ClosingReport {
    /// A report with no receipts.
    #[must_use]
    pub fn empty(date: impl Into<String>, owner: Option<UserId>) -> Self {
        Self {
            summary: BTreeMap::new(),
            total: Decimal::ZERO,
            date: date.into(),
            count: 0,
            owner,
        }
    }
}
