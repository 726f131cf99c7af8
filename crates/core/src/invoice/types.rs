//! Invoice record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An invoice as returned by the backend.
///
/// Amounts are server-computed; the console displays them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: Uuid,
    /// Invoice number, e.g. `INV-2026-0042`.
    pub code: String,
    /// Purchase or sales invoice.
    pub kind: InvoiceKind,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Counterparty name (supplier for purchase, customer for sales).
    pub party: String,
    /// Amount before tax.
    pub subtotal: Decimal,
    /// Tax amount (PPN).
    pub tax: Decimal,
    /// Total amount including tax.
    pub total: Decimal,
    /// Invoice lifecycle status.
    pub status: InvoiceStatus,
}

/// Invoice direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Supplier invoice (accounts payable side).
    Purchase,
    /// Customer invoice (accounts receivable side).
    Sales,
}

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Not yet submitted for approval.
    Draft,
    /// Awaiting approval.
    Submitted,
    /// Approved for payment/collection.
    Approved,
    /// Rejected during approval.
    Rejected,
    /// Fully settled.
    Paid,
    /// Partially settled.
    Partial,
    /// Approved and not yet settled.
    Unpaid,
    /// Past due date and not settled.
    Overdue,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Unpaid => "unpaid",
            Self::Overdue => "overdue",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "paid" => Ok(Self::Paid),
            "partial" => Ok(Self::Partial),
            "unpaid" => Ok(Self::Unpaid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!("Unknown invoice status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Submitted,
            InvoiceStatus::Approved,
            InvoiceStatus::Rejected,
            InvoiceStatus::Paid,
            InvoiceStatus::Partial,
            InvoiceStatus::Unpaid,
            InvoiceStatus::Overdue,
        ] {
            assert_eq!(InvoiceStatus::from_str(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!(InvoiceStatus::from_str("cancelled").is_err());
    }
}
