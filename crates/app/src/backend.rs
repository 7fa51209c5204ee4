//! HTTP client for the hosted backend (identity provider + data API).

use jiff::Timestamp;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Configuration for connecting to the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base address, e.g. `"https://project.example.co"`.
    pub base_url: String,

    /// Publishable API key sent with every request.
    pub api_key: String,
}

/// HTTP client for the hosted auth and data endpoints.
///
/// The data API exposes row-level access to the `menu_items` and `orders`
/// tables; this client only ever reads `menu_items`, and creates or reads
/// `orders`. Order status is written by the fulfilment process, never
/// through this client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http: Client,
}

impl BackendClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Exchange email and password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, refused credentials, or an
    /// unexpected response body.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionRow, BackendError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.config.base_url);

        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = check(response).await?;

        Ok(response.json().await?)
    }

    /// Register a new account and return its first session.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a refused registration, or an
    /// unexpected response body.
    pub async fn register_account(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        roll_number: &str,
    ) -> Result<SessionRow, BackendError> {
        let url = format!("{}/auth/v1/signup", self.config.base_url);

        let body = serde_json::json!({
            "email": email,
            "password": password,
            "data": {
                "full_name": full_name,
                "roll_number": roll_number,
            },
        });

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = check(response).await?;

        Ok(response.json().await?)
    }

    /// Revoke the given access token.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a refused revocation.
    pub async fn revoke_token(&self, access_token: &str) -> Result<(), BackendError> {
        let url = format!("{}/auth/v1/logout", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        check(response).await?;

        Ok(())
    }

    /// List catalog rows currently flagged available, the only filter the
    /// menu view needs.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn available_menu_items(&self) -> Result<Vec<MenuItemRow>, BackendError> {
        let url = format!(
            "{}/rest/v1/menu_items?select=*&available=eq.true",
            self.config.base_url
        );

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let response = check(response).await?;

        Ok(response.json().await?)
    }

    /// Insert an order row and return the persisted representation.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a rejected insert, or when the
    /// store does not echo the persisted row back.
    pub async fn create_order(
        &self,
        access_token: &str,
        order: &OrderInsertRow,
    ) -> Result<OrderRow, BackendError> {
        let url = format!("{}/rest/v1/orders", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(access_token)
            .json(order)
            .send()
            .await?;

        let response = check(response).await?;

        let mut rows: Vec<OrderRow> = response.json().await?;

        rows.pop().ok_or_else(|| {
            BackendError::UnexpectedResponse("order insert returned no rows".to_string())
        })
    }

    /// Fetch an order row by identifier. `None` when no such row exists.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn order_by_id(&self, id: Uuid) -> Result<Option<OrderRow>, BackendError> {
        let url = format!("{}/rest/v1/orders?select=*&id=eq.{id}", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let response = check(response).await?;

        let mut rows: Vec<OrderRow> = response.json().await?;

        Ok(rows.pop())
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();

    Err(BackendError::Rejected { status, message })
}

/// Session payload returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRow {
    /// Bearer token to attach to authenticated requests.
    pub access_token: String,

    /// The account the session belongs to.
    pub user: AccountRow,
}

/// Account embedded in a session payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRow {
    /// Account identifier.
    pub id: Uuid,

    /// Email the account registered with.
    pub email: Option<String>,
}

/// Catalog row from the `menu_items` table. Amounts are in minor units.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemRow {
    /// Row identifier; opaque to the client.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label as stored.
    pub category: String,
    /// Unit price in minor units.
    pub price: u64,
    /// Optional description.
    pub description: Option<String>,
    /// Whether the item can currently be ordered.
    pub available: bool,
}

/// Line item embedded in an order row. Amounts are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRow {
    /// Catalog identifier the line refers to.
    pub item_id: String,
    /// Name captured when the line was added to the cart.
    pub name: String,
    /// Unit price captured when the line was added, in minor units.
    pub unit_price: u64,
    /// Units ordered.
    pub quantity: u32,
}

/// Order row from the `orders` table. Amounts are in minor units.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRow {
    /// Row identifier.
    pub id: Uuid,
    /// Snapshot of the cart lines at submission time.
    pub items: Vec<OrderItemRow>,
    /// Subtotal in minor units.
    pub subtotal: u64,
    /// Tax in minor units.
    pub tax: u64,
    /// Total in minor units.
    pub total: u64,
    /// Payment method label as stored.
    pub payment_method: String,
    /// Raw fulfilment status; written only by the fulfilment process.
    pub status: String,
    /// Estimated time of arrival, when set by the fulfilment process.
    pub eta: Option<Timestamp>,
    /// When the row was created.
    pub created_at: Timestamp,
}

/// Insert payload for the `orders` table. Amounts are in minor units.
///
/// The identifier is generated client side so a retried submission can be
/// deduplicated by the store instead of creating a second order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderInsertRow {
    /// Client-generated order identifier.
    pub id: Uuid,
    /// Account placing the order.
    pub user_id: Uuid,
    /// Snapshot of the cart lines at submission time.
    pub items: Vec<OrderItemRow>,
    /// Subtotal in minor units.
    pub subtotal: u64,
    /// Tax in minor units.
    pub tax: u64,
    /// Total in minor units.
    pub total: u64,
    /// Payment method label.
    pub payment_method: String,
    /// Initial fulfilment status; always the first stage.
    pub status: String,
}

/// Errors that can occur when communicating with the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend refused the request.
    #[error("backend rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code of the refusal.
        status: u16,
        /// Response body, usually a human-readable message.
        message: String,
    },

    /// The backend returned a body the client could not use.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}
