//! Company profile endpoints.

use serde::Serialize;
use tracing::info;

use lunas_core::reports::CompanyInfo;
use lunas_shared::AppResult;

use crate::ApiClient;

/// Request body for updating the company profile.
#[derive(Debug, Default, Serialize)]
pub struct UpdateCompanyRequest {
    /// Legal company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tax identification number (NPWP).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Client for `/api/company` endpoints.
#[derive(Debug)]
pub struct CompanyClient<'a> {
    api: &'a ApiClient,
}

impl<'a> CompanyClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/company` - Fetches company metadata for headers and reports.
    pub async fn get(&self) -> AppResult<CompanyInfo> {
        self.api.get("/api/company", &[]).await
    }

    /// PUT `/api/company` - Updates company metadata.
    pub async fn update(&self, request: &UpdateCompanyRequest) -> AppResult<CompanyInfo> {
        let company: CompanyInfo = self.api.put("/api/company", request).await?;
        info!(name = %company.name, "Company profile updated");
        Ok(company)
    }
}
