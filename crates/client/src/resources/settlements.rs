//! Accounts payable / receivable endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use lunas_core::settlement::{OutstandingRecord, SettlementSide};
use lunas_shared::AppResult;
use lunas_shared::types::PageResponse;

use crate::ApiClient;

use super::ListQuery;

/// Request body for recording a payment against an outstanding record.
///
/// Callers must validate the amount with
/// `lunas_core::settlement::validate_payment` before issuing the request.
#[derive(Debug, Serialize)]
pub struct PaymentRequest {
    /// Payment amount.
    pub amount: Decimal,
    /// Payment date.
    pub date: NaiveDate,
    /// Optional payment method note, e.g. `transfer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

const fn resource(side: SettlementSide) -> &'static str {
    match side {
        SettlementSide::Payable => "/api/payables",
        SettlementSide::Receivable => "/api/receivables",
    }
}

/// Client for AP/AR endpoints.
#[derive(Debug)]
pub struct SettlementsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> SettlementsClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/payables` or `/api/receivables` - Lists outstanding records.
    pub async fn list(
        &self,
        side: SettlementSide,
        query: &ListQuery,
    ) -> AppResult<PageResponse<OutstandingRecord>> {
        self.api.get(resource(side), &query.to_params()).await
    }

    /// GET one outstanding record by ID.
    pub async fn get(&self, side: SettlementSide, id: Uuid) -> AppResult<OutstandingRecord> {
        self.api.get(&format!("{}/{id}", resource(side)), &[]).await
    }

    /// POST `{resource}/{id}/payments` - Records a payment and returns the
    /// updated record.
    pub async fn pay(
        &self,
        side: SettlementSide,
        id: Uuid,
        request: &PaymentRequest,
    ) -> AppResult<OutstandingRecord> {
        let record: OutstandingRecord = self
            .api
            .post(&format!("{}/{id}/payments", resource(side)), request)
            .await?;
        info!(
            invoice = %record.invoice_code,
            amount = %request.amount,
            "Payment recorded"
        );
        Ok(record)
    }
}
