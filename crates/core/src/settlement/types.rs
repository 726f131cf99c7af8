//! Outstanding balance records for AP and AR screens.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the ledger an outstanding record sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementSide {
    /// Money the business owes a supplier.
    Payable,
    /// Money a customer owes the business.
    Receivable,
}

/// Settlement status of an outstanding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// No payment recorded yet.
    Unpaid,
    /// Partially settled.
    Partial,
    /// Fully settled.
    Paid,
    /// Past due date with a remaining balance.
    Overdue,
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        };
        write!(f, "{s}")
    }
}

/// An AP/AR record referencing an invoice.
///
/// `balance` is computed server-side as `amount - paid_amount`; the console
/// displays it without recomputing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutstandingRecord {
    /// Record ID.
    pub id: Uuid,
    /// Referenced invoice number.
    pub invoice_code: String,
    /// Counterparty name.
    pub party: String,
    /// Original obligation amount.
    pub amount: Decimal,
    /// Amount settled so far.
    pub paid_amount: Decimal,
    /// Remaining balance (server-computed).
    pub balance: Decimal,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Settlement status.
    pub status: SettlementStatus,
}

impl OutstandingRecord {
    /// Whether the screen offers a payment action for this row.
    ///
    /// Only rows with a remaining balance can take a payment.
    #[must_use]
    pub fn payable(&self) -> bool {
        self.balance > Decimal::ZERO && self.status != SettlementStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(amount: Decimal, paid: Decimal, status: SettlementStatus) -> OutstandingRecord {
        OutstandingRecord {
            id: Uuid::new_v4(),
            invoice_code: "INV-001".to_string(),
            party: "PT Maju".to_string(),
            amount,
            paid_amount: paid,
            balance: amount - paid,
            due_date: None,
            status,
        }
    }

    #[test]
    fn test_open_record_is_payable() {
        assert!(record(dec!(1000), dec!(400), SettlementStatus::Partial).payable());
        assert!(record(dec!(500), dec!(0), SettlementStatus::Unpaid).payable());
    }

    #[test]
    fn test_settled_record_is_not_payable() {
        assert!(!record(dec!(500), dec!(500), SettlementStatus::Paid).payable());
    }
}
