//! Purchase and sales order endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use lunas_shared::AppResult;
use lunas_shared::types::PageResponse;

use crate::ApiClient;

use super::ListQuery;

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    /// Order placed with a supplier.
    Purchase,
    /// Order received from a customer.
    Sales,
}

impl OrderKind {
    const fn resource(self) -> &'static str {
        match self {
            Self::Purchase => "/api/purchase_orders",
            Self::Sales => "/api/sales_orders",
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Being drafted.
    Draft,
    /// Awaiting approval.
    Submitted,
    /// Approved and awaiting fulfilment.
    Approved,
    /// Rejected during approval.
    Rejected,
    /// Goods received (purchase) or delivered (sales).
    Received,
    /// Fully processed and invoiced.
    Closed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Received => "received",
            Self::Closed => "closed",
        };
        write!(f, "{s}")
    }
}

/// A purchase or sales order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: Uuid,
    /// Order number, e.g. `PO-2026-0017`.
    pub code: String,
    /// Order direction.
    pub kind: OrderKind,
    /// Order date.
    pub date: NaiveDate,
    /// Counterparty name.
    pub party: String,
    /// Order total including tax.
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
}

/// Request body for confirming goods receipt (GRN) against a purchase order.
#[derive(Debug, Serialize)]
pub struct ReceiveRequest {
    /// Physical receipt date.
    pub received_date: NaiveDate,
    /// Optional receiving notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Client for order endpoints.
#[derive(Debug)]
pub struct OrdersClient<'a> {
    api: &'a ApiClient,
}

impl<'a> OrdersClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// GET `/api/purchase_orders` or `/api/sales_orders` - Lists orders.
    pub async fn list(&self, kind: OrderKind, query: &ListQuery) -> AppResult<PageResponse<Order>> {
        self.api.get(kind.resource(), &query.to_params()).await
    }

    /// GET one order by ID.
    pub async fn get(&self, kind: OrderKind, id: Uuid) -> AppResult<Order> {
        self.api
            .get(&format!("{}/{id}", kind.resource()), &[])
            .await
    }

    /// POST `/api/purchase_orders/{id}/receive` - Records a goods receipt
    /// note against a purchase order and returns the updated order.
    pub async fn receive(&self, id: Uuid, request: &ReceiveRequest) -> AppResult<Order> {
        let order: Order = self
            .api
            .post(&format!("/api/purchase_orders/{id}/receive"), request)
            .await?;
        info!(order = %order.code, "Goods receipt recorded");
        Ok(order)
    }
}
