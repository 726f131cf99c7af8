//! Journal entry display types.
//!
//! The double-entry invariant (total debit == total credit) is enforced by
//! the backend. The console only computes the displayed totals and flags the
//! row when the server-asserted equality fails.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One debit/credit line of a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// COA account code.
    pub account_code: String,
    /// COA account name.
    pub account_name: String,
    /// Debit amount (zero when the line credits).
    pub debit: Decimal,
    /// Credit amount (zero when the line debits).
    pub credit: Decimal,
}

/// A journal entry as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry ID.
    pub id: Uuid,
    /// Posting date.
    pub date: NaiveDate,
    /// Reference number, e.g. `JRN-2026-0103`.
    pub reference: String,
    /// Entry description.
    pub description: String,
    /// Debit/credit lines.
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Returns (total debit, total credit) across all lines.
    #[must_use]
    pub fn totals(&self) -> (Decimal, Decimal) {
        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        for line in &self.lines {
            debit += line.debit;
            credit += line.credit;
        }
        (debit, credit)
    }

    /// Display flag: true when total debit equals total credit.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let (debit, credit) = self.totals();
        debit == credit
    }
}
