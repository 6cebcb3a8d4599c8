//! Receipt routes: listing, creation, deletion and closing reports.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get},
};
use riocaja_core::receipts::{Receipt, ReceiptData, ReceiptDate};
use riocaja_core::reports::ClosingReport;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;

/// A list of receipts.
#[derive(Debug, Serialize)]
pub struct ReceiptListResponse {
    /// Receipts, newest first.
    pub data: Vec<Receipt>,
    /// Number of receipts.
    pub count: usize,
}

impl From<Vec<Receipt>> for ReceiptListResponse {
    fn from(data: Vec<Receipt>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A created receipt.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Always true.
    pub success: bool,
    /// The stored receipt.
    pub data: Receipt,
}

/// Deletion acknowledgment.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Always true.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// Creates the receipts router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/receipts", get(list_receipts).post(create_receipt))
        .route("/receipts/", get(list_receipts).post(create_receipt))
        .route("/receipts/date/{date}", get(list_by_date))
        .route("/receipts/report/{date}", get(closing_report))
        .route("/receipts/{transaction_number}", delete(delete_receipt))
}

/// GET /receipts - Receipts in the caller's scope.
async fn list_receipts(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ReceiptListResponse>> {
    let receipts = state.receipts.list_all(user.scope()).await?;
    Ok(Json(receipts.into()))
}

/// GET /receipts/date/{dd-mm-yyyy} - Receipts in scope for one day.
async fn list_by_date(
    State(state): State<AppState>,
    user: AuthUser,
    Path(date): Path<String>,
) -> ApiResult<Json<ReceiptListResponse>> {
    let date = ReceiptDate::parse(&date)?;
    let receipts = state.receipts.list_by_date(user.scope(), &date).await?;
    Ok(Json(receipts.into()))
}

/// POST /receipts - Store a receipt owned by the caller.
async fn create_receipt(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<ReceiptData>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(data) = payload?;
    let receipt = state.receipts.create(user.scope(), data).await?;

    info!(
        user_id = %user.user_id(),
        transaction_number = %receipt.transaction_number(),
        "Receipt created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            data: receipt,
        }),
    ))
}

/// GET /receipts/report/{dd-mm-yyyy} - Closing report for one day.
async fn closing_report(
    State(state): State<AppState>,
    user: AuthUser,
    Path(date): Path<String>,
) -> ApiResult<Json<ClosingReport>> {
    let date = ReceiptDate::parse(&date)?;
    let report = state.reports.closing_report(user.scope(), &date).await?;
    Ok(Json(report))
}

/// DELETE /receipts/{transaction_number} - Delete a receipt in scope.
async fn delete_receipt(
    State(state): State<AppState>,
    user: AuthUser,
    Path(transaction_number): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    state
        .receipts
        .delete(user.scope(), &transaction_number)
        .await?;

    Ok(Json(DeletedResponse {
        success: true,
        message: "Comprobante eliminado exitosamente",
    }))
}
