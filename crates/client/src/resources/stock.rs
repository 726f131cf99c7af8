//! Stock endpoints.

use lunas_core::stock::StockItem;
use lunas_shared::AppResult;
use lunas_shared::types::PageResponse;

use crate::ApiClient;

use super::ListQuery;

/// Client for `/api/stock` endpoints.
#[derive(Debug)]
pub struct StockClient<'a> {
    api: &'a ApiClient,
}

impl<'a> StockClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/stock` - Lists stock items.
    pub async fn list(&self, query: &ListQuery) -> AppResult<PageResponse<StockItem>> {
        self.api.get("/api/stock", &query.to_params()).await
    }
}
