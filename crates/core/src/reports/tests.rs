//! Closing report tests.

use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use riocaja_shared::types::{ReceiptId, UserId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::auth::Scope;
use crate::receipts::{
    MAX_TOTAL_VALUE, Receipt, ReceiptData, ReceiptDate, ReceiptError, ReceiptRepository,
};
use crate::store::memory::InMemoryReceiptStore;

fn data(number: &str, kind: Option<&str>, value: Decimal) -> ReceiptData {
    ReceiptData {
        bank: "Banco Pichincha".to_string(),
        date: "05/05/2025".to_string(),
        time: "09:00:00".to_string(),
        transaction_type: kind.map(str::to_string),
        transaction_number: number.to_string(),
        control_number: "C-1".to_string(),
        branch: "Centro".to_string(),
        alternate_date: String::new(),
        agent: "CNB-1".to_string(),
        account_type: "Ahorros".to_string(),
        total_value: value,
        full_text: String::new(),
    }
}

fn stored(number: &str, kind: Option<&str>, value: Decimal) -> Receipt {
    Receipt {
        id: ReceiptId::new(),
        data: data(number, kind, value),
        owner: None,
        created_at: Utc::now(),
    }
}

fn aggregator() -> (ReportAggregator, ReceiptRepository) {
    let repo = ReceiptRepository::new(Arc::new(InMemoryReceiptStore::new()));
    (ReportAggregator::new(repo.clone()), repo)
}

#[tokio::test]
async fn test_closing_report_totals_by_type() {
    let (reports, repo) = aggregator();
    let user = UserId::new();
    let scope = Scope::OwnedBy(user);

    repo.create(scope, data("T1", Some("deposit"), dec!(100.50)))
        .await
        .unwrap();
    repo.create(scope, data("T2", Some("deposit"), dec!(50.25)))
        .await
        .unwrap();
    repo.create(scope, data("T3", Some("withdrawal"), dec!(30.00)))
        .await
        .unwrap();

    let date = ReceiptDate::parse("05-05-2025").unwrap();
    let report = reports.closing_report(scope, &date).await.unwrap();

    assert_eq!(report.total, dec!(180.75));
    assert_eq!(report.count, 3);
    assert_eq!(report.summary.len(), 2);
    assert_eq!(report.summary["deposit"], dec!(150.75));
    assert_eq!(report.summary["withdrawal"], dec!(30.00));
    assert_eq!(report.date, "05/05/2025");
    assert_eq!(report.owner, Some(user));
}

#[tokio::test]
async fn test_closing_report_only_counts_scope() {
    let (reports, repo) = aggregator();
    let u = Scope::OwnedBy(UserId::new());
    let v = Scope::OwnedBy(UserId::new());

    repo.create(u, data("T1", Some("deposit"), dec!(10.00)))
        .await
        .unwrap();
    repo.create(v, data("T2", Some("deposit"), dec!(99.99)))
        .await
        .unwrap();

    let date = ReceiptDate::parse("05/05/2025").unwrap();
    let mine = reports.closing_report(u, &date).await.unwrap();
    assert_eq!(mine.total, dec!(10.00));
    assert_eq!(mine.count, 1);

    let everyone = reports.closing_report(Scope::Unrestricted, &date).await.unwrap();
    assert_eq!(everyone.total, dec!(109.99));
    assert_eq!(everyone.owner, None);
}

#[tokio::test]
async fn test_empty_day_is_zero_report() {
    let (reports, _) = aggregator();
    let user = UserId::new();
    let date = ReceiptDate::parse("01/01/2025").unwrap();

    let report = reports
        .closing_report(Scope::OwnedBy(user), &date)
        .await
        .unwrap();

    assert_eq!(report, ClosingReport::empty("01/01/2025", Some(user)));
    assert!(report.summary.is_empty());
    assert_eq!(report.total, Decimal::ZERO);
}

#[test]
fn test_missing_type_grouped_as_unknown() {
    let receipts = [
        stored("T1", None, dec!(5.00)),
        stored("T2", None, dec!(2.50)),
        stored("T3", Some("deposit"), dec!(1.00)),
    ];

    let report = ReportAggregator::summarize("05/05/2025", None, &receipts).unwrap();
    assert_eq!(report.summary[UNKNOWN_TYPE], dec!(7.50));
    assert_eq!(report.summary["deposit"], dec!(1.00));
    assert_eq!(UNKNOWN_TYPE, "Desconocido");
}

#[test]
fn test_report_wire_shape() {
    let receipts = [stored("T1", Some("deposit"), dec!(100.50))];
    let report = ReportAggregator::summarize("05/05/2025", None, &receipts).unwrap();

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["summary"]["deposit"], "100.50");
    assert_eq!(value["total"], "100.50");
    assert_eq!(value["date"], "05/05/2025");
    assert_eq!(value["count"], 1);
    assert!(value["usuario_id"].is_null());
}

fn kinds() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("deposit".to_string())),
        Just(Some("withdrawal".to_string())),
        Just(Some("payment".to_string())),
    ]
}

#[test]
fn test_summary_overflow_is_an_error() {
    let receipts = [
        stored("T1", Some("deposit"), Decimal::MAX),
        stored("T2", Some("deposit"), Decimal::MAX),
    ];

    let result = ReportAggregator::summarize("05/05/2025", None, &receipts);
    assert!(matches!(result, Err(ReceiptError::Unexpected(_))));
}

#[tokio::test]
async fn test_oversized_totals_never_reach_the_report() {
    let (reports, repo) = aggregator();
    let scope = Scope::OwnedBy(UserId::new());

    for number in ["T1", "T2"] {
        let result = repo
            .create(scope, data(number, Some("deposit"), Decimal::MAX))
            .await;
        assert!(matches!(result, Err(ReceiptError::InvalidAmount(_))));
    }
    let largest = MAX_TOTAL_VALUE - dec!(0.0001);
    repo.create(scope, data("T3", Some("deposit"), largest))
        .await
        .unwrap();
    repo.create(scope, data("T4", Some("deposit"), largest))
        .await
        .unwrap();

    let date = ReceiptDate::parse("05/05/2025").unwrap();
    let report = reports.closing_report(scope, &date).await.unwrap();
    assert_eq!(report.total, largest * dec!(2));
    assert_eq!(report.count, 2);
}

proptest! {
    /// Summary subtotals always add up to the total, cent for cent.
    #[test]
    fn test_summary_sums_to_total(
        entries in prop::collection::vec((kinds(), 0i64..10_000_000), 0..40),
    ) {
        let receipts: Vec<Receipt> = entries
            .iter()
            .enumerate()
            .map(|(i, (kind, cents))| {
                stored(&format!("T{i}"), kind.as_deref(), Decimal::new(*cents, 2))
            })
            .collect();

        let report = ReportAggregator::summarize("05/05/2025", None, &receipts).unwrap();
        let expected: Decimal = entries.iter().map(|(_, cents)| Decimal::new(*cents, 2)).sum();

        prop_assert_eq!(report.total, expected);
        prop_assert_eq!(report.summary.values().copied().sum::<Decimal>(), report.total);
        prop_assert_eq!(report.count, receipts.len());
    }
}
