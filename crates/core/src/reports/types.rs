//! Report data types.
//!
//! Reports arrive fully computed from the backend. The console renders them,
//! verifies the displayed accounting identity, and feeds them to the export
//! pipeline.

use chrono::NaiveDate;
use lunas_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company metadata for report headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Legal company name.
    pub name: String,
    /// Tax identification number (NPWP).
    pub tax_id: String,
    /// Street address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

/// One labeled amount line in a report section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Account or item label.
    pub label: String,
    /// Server-computed amount.
    pub amount: Decimal,
}

/// A titled group of report rows with its server-computed total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section title, e.g. `Assets`.
    pub title: String,
    /// Line items.
    pub rows: Vec<ReportRow>,
    /// Section total.
    pub total: Decimal,
}

/// Result of the balance sheet identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCheck {
    /// Assets equal liabilities plus equity.
    Balanced,
    /// The identity fails by `difference`.
    Unbalanced {
        /// `total_assets - (total_liabilities + total_equity)`.
        difference: Decimal,
    },
}

/// Balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// As-of date.
    pub as_of: NaiveDate,
    /// Report currency.
    pub currency: Currency,
    /// Assets section.
    pub assets: ReportSection,
    /// Liabilities section.
    pub liabilities: ReportSection,
    /// Equity section.
    pub equity: ReportSection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity.
    pub total_equity: Decimal,
}

impl BalanceSheetReport {
    /// Checks the displayed accounting identity.
    ///
    /// Reads `Balanced` exactly when
    /// `total_assets == total_liabilities + total_equity`.
    #[must_use]
    pub fn balance_check(&self) -> BalanceCheck {
        let difference = self.total_assets - (self.total_liabilities + self.total_equity);
        if difference.is_zero() {
            BalanceCheck::Balanced
        } else {
            BalanceCheck::Unbalanced { difference }
        }
    }
}

/// Income statement (profit & loss) report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Report currency.
    pub currency: Currency,
    /// Revenue section.
    pub revenue: ReportSection,
    /// Expenses section.
    pub expenses: ReportSection,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Net income (revenue - expenses).
    pub net_income: Decimal,
}

impl IncomeStatementReport {
    /// Net margin as a percentage of revenue.
    ///
    /// Returns `None` when revenue is zero rather than dividing by it.
    #[must_use]
    pub fn gross_margin(&self) -> Option<Decimal> {
        if self.total_revenue.is_zero() {
            return None;
        }
        Some((self.net_income / self.total_revenue) * Decimal::ONE_HUNDRED)
    }
}

/// Stock valuation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockValuationReport {
    /// As-of date.
    pub as_of: NaiveDate,
    /// Report currency.
    pub currency: Currency,
    /// Valued items.
    pub items: Vec<crate::stock::StockItem>,
    /// Total stock value.
    pub total_value: Decimal,
}
