//! Summary cards for the AP/AR screens.

use rust_decimal::Decimal;

use super::types::OutstandingRecord;

/// Totals shown above an AP/AR list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementSummary {
    /// Sum of the amount column.
    pub total_amount: Decimal,
    /// Sum of the paid column.
    pub total_paid: Decimal,
    /// Sum of the balance column.
    pub total_balance: Decimal,
    /// Number of rows still carrying a balance.
    pub open_count: usize,
}

/// Sums the displayed columns of an AP/AR list.
#[must_use]
pub fn summarize(records: &[OutstandingRecord]) -> SettlementSummary {
    let mut summary = SettlementSummary {
        total_amount: Decimal::ZERO,
        total_paid: Decimal::ZERO,
        total_balance: Decimal::ZERO,
        open_count: 0,
    };

    for record in records {
        summary.total_amount += record.amount;
        summary.total_paid += record.paid_amount;
        summary.total_balance += record.balance;
        if record.payable() {
            summary.open_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::SettlementStatus;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn record(
        amount: Decimal,
        paid: Decimal,
        balance: Decimal,
        status: SettlementStatus,
    ) -> OutstandingRecord {
        OutstandingRecord {
            id: Uuid::new_v4(),
            invoice_code: "INV-001".to_string(),
            party: "CV Abadi".to_string(),
            amount,
            paid_amount: paid,
            balance,
            due_date: None,
            status,
        }
    }

    #[test]
    fn test_summary_cards() {
        // 1000/400/600 partial + 500/500/0 paid -> 1500 / 900 / 600, one open row.
        let rows = vec![
            record(dec!(1000), dec!(400), dec!(600), SettlementStatus::Partial),
            record(dec!(500), dec!(500), dec!(0), SettlementStatus::Paid),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_amount, dec!(1500));
        assert_eq!(summary.total_paid, dec!(900));
        assert_eq!(summary.total_balance, dec!(600));
        assert_eq!(summary.open_count, 1);
    }

    #[test]
    fn test_empty_list() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert_eq!(summary.open_count, 0);
    }
}
