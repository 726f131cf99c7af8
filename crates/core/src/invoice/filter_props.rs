//! Property-based tests for invoice list filtering.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::filter::InvoiceFilter;
use super::types::{Invoice, InvoiceKind, InvoiceStatus};

fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Submitted),
        Just(InvoiceStatus::Approved),
        Just(InvoiceStatus::Rejected),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Partial),
        Just(InvoiceStatus::Unpaid),
        Just(InvoiceStatus::Overdue),
    ]
}

fn invoice_strategy() -> impl Strategy<Value = Invoice> {
    (
        "[A-Z]{3}-[0-9]{4}",
        "[A-Za-z ]{1,12}",
        status_strategy(),
        0u32..730,
        1i64..10_000_000,
    )
        .prop_map(|(code, party, status, day_offset, cents)| {
            let date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(u64::from(day_offset)))
                .unwrap();
            let subtotal = Decimal::new(cents, 2);
            let tax = subtotal * Decimal::new(11, 2);
            Invoice {
                id: Uuid::new_v4(),
                code,
                kind: InvoiceKind::Sales,
                date,
                due_date: None,
                party,
                subtotal,
                tax,
                total: subtotal + tax,
                status,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Filtering never increases the row count.
    #[test]
    fn prop_filter_never_grows(
        rows in prop::collection::vec(invoice_strategy(), 0..30),
        status in prop::option::of(status_strategy()),
        text in prop::option::of("[a-z]{1,4}"),
    ) {
        let filter = InvoiceFilter { status, text, ..Default::default() };
        prop_assert!(filter.apply(&rows).len() <= rows.len());
    }

    /// Every retained row satisfies the active predicate.
    #[test]
    fn prop_retained_rows_match(
        rows in prop::collection::vec(invoice_strategy(), 0..30),
        status in status_strategy(),
    ) {
        let filter = InvoiceFilter { status: Some(status), ..Default::default() };
        for kept in filter.apply(&rows) {
            prop_assert_eq!(kept.status, status);
        }
    }

    /// An empty filter is the identity.
    #[test]
    fn prop_empty_filter_is_identity(rows in prop::collection::vec(invoice_strategy(), 0..30)) {
        let kept = InvoiceFilter::default().apply(&rows);
        prop_assert_eq!(kept.len(), rows.len());
    }

    /// Rows the filter drops really do violate a criterion.
    #[test]
    fn prop_dropped_rows_violate(
        rows in prop::collection::vec(invoice_strategy(), 0..30),
        status in status_strategy(),
    ) {
        let filter = InvoiceFilter { status: Some(status), ..Default::default() };
        let kept = filter.apply(&rows);
        let dropped = rows.len() - kept.len();
        let violating = rows.iter().filter(|r| r.status != status).count();
        prop_assert_eq!(dropped, violating);
    }
}
