//! Invoice endpoints.

use uuid::Uuid;

use lunas_core::invoice::{Invoice, InvoiceKind};
use lunas_shared::AppResult;
use lunas_shared::types::PageResponse;

use crate::ApiClient;

use super::ListQuery;

/// Client for `/api/invoices` endpoints.
#[derive(Debug)]
pub struct InvoicesClient<'a> {
    api: &'a ApiClient,
}

impl<'a> InvoicesClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/invoices` - Lists invoices, optionally restricted to one kind.
    pub async fn list(
        &self,
        kind: Option<InvoiceKind>,
        query: &ListQuery,
    ) -> AppResult<PageResponse<Invoice>> {
        let mut params = query.to_params();
        if let Some(kind) = kind {
            let value = match kind {
                InvoiceKind::Purchase => "purchase",
                InvoiceKind::Sales => "sales",
            };
            params.push(("kind", value.to_string()));
        }
        self.api.get("/api/invoices", &params).await
    }

    /// GET `/api/invoices/{id}` - Fetches one invoice.
    pub async fn get(&self, id: Uuid) -> AppResult<Invoice> {
        self.api.get(&format!("/api/invoices/{id}"), &[]).await
    }
}
