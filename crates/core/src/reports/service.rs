//! Closing report aggregation.

use riocaja_shared::types::UserId;
use rust_decimal::Decimal;
use tracing::info;

use super::types::{ClosingReport, UNKNOWN_TYPE};
use crate::auth::Scope;
use crate::receipts::{Receipt, ReceiptDate, ReceiptError, ReceiptRepository};

/// Builds closing reports over the receipts a scope can see.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    receipts: ReceiptRepository,
}

impl ReportAggregator {
    /// Creates an aggregator reading through `receipts`.
    #[must_use]
    pub fn new(receipts: ReceiptRepository) -> Self {
        Self { receipts }
    }

    /// Closing report for `date`, restricted to what `scope` admits.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Unexpected` on storage failure or if the
    /// totals overflow.
    pub async fn closing_report(
        &self,
        scope: Scope,
        date: &ReceiptDate,
    ) -> Result<ClosingReport, ReceiptError> {
        let receipts = self.receipts.list_by_date(scope, date).await?;
        let report = Self::summarize(date.as_str(), scope.owner(), &receipts)?;

        info!(
            date = %report.date,
            count = report.count,
            total = %report.total,
            "Closing report generated"
        );
        Ok(report)
    }

    /// Totals `receipts` without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::Unexpected` if a subtotal or the total overflows.
    pub fn summarize(
        date: &str,
        owner: Option<UserId>,
        receipts: &[Receipt],
    ) -> Result<ClosingReport, ReceiptError> {
        let mut report = ClosingReport::empty(date, owner);

        for receipt in receipts {
            let value = receipt.data.total_value;
            let key = receipt
                .data
                .transaction_type
                .as_deref()
                .unwrap_or(UNKNOWN_TYPE);

            let subtotal = report.summary.entry(key.to_string()).or_default();
            *subtotal = checked_sum(*subtotal, value, date)?;
            report.total = checked_sum(report.total, value, date)?;
        }
        report.count = receipts.len();

        Ok(report)
    }
}

fn checked_sum(acc: Decimal, value: Decimal, date: &str) -> Result<Decimal, ReceiptError> {
    acc.checked_add(value).ok_or_else(|| {
        ReceiptError::Unexpected(format!("closing report total overflowed for {date}"))
    })
}
