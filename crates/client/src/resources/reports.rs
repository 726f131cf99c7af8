//! Report endpoints.
//!
//! Reports are computed entirely server-side; these calls only fetch them.

use chrono::NaiveDate;

use lunas_core::reports::{BalanceSheetReport, IncomeStatementReport, StockValuationReport};
use lunas_shared::AppResult;

use crate::ApiClient;

/// Client for `/api/reports` endpoints.
#[derive(Debug)]
pub struct ReportsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ReportsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/reports/balance_sheet` - Balance sheet as of a date.
    pub async fn balance_sheet(&self, as_of: NaiveDate) -> AppResult<BalanceSheetReport> {
        self.api
            .get("/api/reports/balance_sheet", &[("as_of", as_of.to_string())])
            .await
    }

    /// GET `/api/reports/income_statement` - Profit and loss for a period.
    pub async fn income_statement(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<IncomeStatementReport> {
        self.api
            .get(
                "/api/reports/income_statement",
                &[("from_date", from.to_string()), ("to_date", to.to_string())],
            )
            .await
    }

    /// GET `/api/reports/stock_valuation` - Stock valuation as of a date.
    pub async fn stock_valuation(&self, as_of: NaiveDate) -> AppResult<StockValuationReport> {
        self.api
            .get(
                "/api/reports/stock_valuation",
                &[("as_of", as_of.to_string())],
            )
            .await
    }
}
