//! Canonical receipt dates.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::ReceiptError;

const CANONICAL_FORMAT: &str = "%d/%m/%Y";

/// A calendar date in its canonical `dd/mm/yyyy` form.
///
/// Path segments cannot carry `/`, so URLs use `dd-mm-yyyy`; both forms parse
/// to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReceiptDate(String);

impl ReceiptDate {
    /// Parses `dd/mm/yyyy` or `dd-mm-yyyy`, zero-padding day and month.
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::InvalidDate` if the input is not a real date.
    pub fn parse(input: &str) -> Result<Self, ReceiptError> {
        let normalized = input.trim().replace('-', "/");
        if !normalized.rsplit('/').next().is_some_and(|year| year.len() == 4) {
            return Err(ReceiptError::InvalidDate(input.to_string()));
        }
        NaiveDate::parse_from_str(&normalized, CANONICAL_FORMAT)
            .map(|date| Self(date.format(CANONICAL_FORMAT).to_string()))
            .map_err(|_| ReceiptError::InvalidDate(input.to_string()))
    }

    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
