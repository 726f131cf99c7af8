//! Authenticated REST client for the Lunas backend.
//!
//! This crate provides:
//! - `ApiClient`, a thin wrapper over `reqwest` with bearer-token auth
//! - Response envelope decoding (`{success, data, message}`)
//! - Per-resource clients, one per console screen
//! - `SessionStore`, the persisted token/profile store

pub mod resources;
pub mod session;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use lunas_shared::{AppError, AppResult};

pub use session::{Session, SessionStore};

/// Standard response envelope returned by every backend endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct Envelope<T> {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Response payload. Absent on some failures.
    pub data: Option<T>,
    /// Human-readable message, set on failures and some mutations.
    pub message: Option<String>,
}

/// HTTP client for the Lunas backend.
///
/// One request, one outcome: no retries, no backoff, no response caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Sets or clears the bearer token sent with subsequent requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Returns a copy of this client carrying the given bearer token.
    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Issues a GET request and decodes the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, a rejected
    /// envelope, or an undecodable body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        debug!(path, "GET");
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    /// Issues a POST request with a JSON body and decodes the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, a rejected
    /// envelope, or an undecodable body.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        debug!(path, "POST");
        let request = self.http.post(format!("{}{path}", self.base_url)).json(body);
        self.execute(request).await
    }

    /// Issues a PUT request with a JSON body and decodes the envelope payload.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, a rejected
    /// envelope, or an undecodable body.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        debug!(path, "PUT");
        let request = self.http.put(format!("{}{path}", self.base_url)).json(body);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Request failed");
            AppError::Api(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        if !status.is_success() {
            // Failure bodies usually still carry the envelope message.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("backend returned HTTP {}", status.as_u16()));
            return Err(AppError::from_status(status.as_u16(), message));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            AppError::Decode(e.to_string())
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "request rejected by backend".to_string());
            return Err(AppError::Api(message));
        }

        envelope
            .data
            .ok_or_else(|| AppError::Decode("response envelope carried no data".to_string()))
    }

    /// Account (COA) endpoints.
    #[must_use]
    pub fn accounts(&self) -> resources::accounts::AccountsClient<'_> {
        resources::accounts::AccountsClient::new(self)
    }

    /// Authentication endpoints.
    #[must_use]
    pub fn auth(&self) -> resources::auth::AuthClient<'_> {
        resources::auth::AuthClient::new(self)
    }

    /// Company profile endpoints.
    #[must_use]
    pub fn company(&self) -> resources::company::CompanyClient<'_> {
        resources::company::CompanyClient::new(self)
    }

    /// Invoice endpoints.
    #[must_use]
    pub fn invoices(&self) -> resources::invoices::InvoicesClient<'_> {
        resources::invoices::InvoicesClient::new(self)
    }

    /// Journal endpoints.
    #[must_use]
    pub fn journals(&self) -> resources::journals::JournalsClient<'_> {
        resources::journals::JournalsClient::new(self)
    }

    /// Purchase/sales order endpoints.
    #[must_use]
    pub fn orders(&self) -> resources::orders::OrdersClient<'_> {
        resources::orders::OrdersClient::new(self)
    }

    /// Report endpoints.
    #[must_use]
    pub fn reports(&self) -> resources::reports::ReportsClient<'_> {
        resources::reports::ReportsClient::new(self)
    }

    /// AP/AR endpoints.
    #[must_use]
    pub fn settlements(&self) -> resources::settlements::SettlementsClient<'_> {
        resources::settlements::SettlementsClient::new(self)
    }

    /// Stock endpoints.
    #[must_use]
    pub fn stock(&self) -> resources::stock::StockClient<'_> {
        resources::stock::StockClient::new(self)
    }

    /// User management endpoints.
    #[must_use]
    pub fn users(&self) -> resources::users::UsersClient<'_> {
        resources::users::UsersClient::new(self)
    }
}
