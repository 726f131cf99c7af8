//! Journal entry endpoints.

use uuid::Uuid;

use lunas_core::journal::JournalEntry;
use lunas_shared::AppResult;
use lunas_shared::types::PageResponse;

use crate::ApiClient;

use super::ListQuery;

/// Client for `/api/journals` endpoints.
#[derive(Debug)]
pub struct JournalsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> JournalsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/journals` - Lists journal entries.
    pub async fn list(&self, query: &ListQuery) -> AppResult<PageResponse<JournalEntry>> {
        self.api.get("/api/journals", &query.to_params()).await
    }

    /// GET `/api/journals/{id}` - Fetches one entry with its lines.
    pub async fn get(&self, id: Uuid) -> AppResult<JournalEntry> {
        self.api.get(&format!("/api/journals/{id}"), &[]).await
    }
}
