//! Chart-of-accounts endpoints.

use lunas_core::coa::{AccountType, ChartAccount};
use lunas_shared::AppResult;

use crate::ApiClient;

/// Client for `/api/accounts` endpoints.
#[derive(Debug)]
pub struct AccountsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AccountsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/accounts` - Lists the chart of accounts, optionally
    /// restricted to one account type.
    pub async fn list(&self, account_type: Option<AccountType>) -> AppResult<Vec<ChartAccount>> {
        let mut params = Vec::new();
        if let Some(t) = account_type {
            params.push(("type", t.to_string()));
        }
        self.api.get("/api/accounts", &params).await
    }
}
