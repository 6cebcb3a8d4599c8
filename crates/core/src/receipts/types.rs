//! Receipt data types.
//!
//! Field names on the wire are the ones the mobile client already sends.

use chrono::{DateTime, Utc};
use riocaja_shared::types::{ReceiptId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest accepted `valor_total` magnitude (10^15), exclusive.
pub const MAX_TOTAL_VALUE: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Most decimal places accepted in `valor_total`.
pub const MAX_TOTAL_SCALE: u32 = 4;

/// Receipt fields supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Bank name.
    #[serde(rename = "banco")]
    pub bank: String,
    /// Transaction date, `dd/mm/yyyy`.
    #[serde(rename = "fecha")]
    pub date: String,
    /// Transaction time as printed on the receipt.
    #[serde(rename = "hora")]
    pub time: String,
    /// Transaction type (deposit, withdrawal, ...). Legacy records may lack it.
    #[serde(rename = "tipo", default)]
    pub transaction_type: Option<String>,
    /// External transaction number.
    #[serde(rename = "nro_transaccion", alias = "nroTransaccion")]
    pub transaction_number: String,
    /// Control number.
    #[serde(rename = "nro_control", alias = "nroControl")]
    pub control_number: String,
    /// Branch identifier.
    #[serde(rename = "local")]
    pub branch: String,
    /// Alternate date printed on some receipts.
    #[serde(rename = "fecha_alternativa", alias = "fechaAlternativa", default)]
    pub alternate_date: String,
    /// Banking agent identifier.
    #[serde(rename = "corresponsal")]
    pub agent: String,
    /// Account type.
    #[serde(rename = "tipo_cuenta", alias = "tipoCuenta", default)]
    pub account_type: String,
    /// Total value. Accepted as a JSON number or string, emitted as a string.
    /// Bounded by [`MAX_TOTAL_VALUE`] and [`MAX_TOTAL_SCALE`] on create.
    #[serde(rename = "valor_total", alias = "valorTotal")]
    pub total_value: Decimal,
    /// Raw text extracted from the receipt image.
    #[serde(rename = "full_text", alias = "fullText", default)]
    pub full_text: String,
}

/// A receipt ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewReceipt {
    /// Client-supplied fields, date already canonical.
    pub data: ReceiptData,
    /// Owner stamped from the creating scope; `None` for unrestricted creates.
    pub owner: Option<UserId>,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// A stored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Generated identifier.
    #[serde(rename = "_id")]
    pub id: ReceiptId,
    /// Client-supplied fields.
    #[serde(flatten)]
    pub data: ReceiptData,
    /// Owning user; `None` means unscoped.
    #[serde(rename = "usuario_id")]
    pub owner: Option<UserId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Transaction number shortcut.
    #[must_use]
    pub fn transaction_number(&self) -> &str {
        &self.data.transaction_number
    }
}
