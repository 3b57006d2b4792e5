//! Backend REST API client.
//!
//! # Architecture
//!
//! - One async operation per backend capability (§ products, auth, orders)
//! - The backend is the source of truth - no local sync, direct API calls
//! - Every response is an envelope `{success, message?, data}`
//! - The stored bearer token is read from the local store at call time and
//!   attached as an `Authorization` header when present
//! - In-memory caching via `moka` for product detail and the category list
//!   (5 minute TTL)
//!
//! Failures are surfaced immediately: no retries, no explicit timeout
//! (the transport default applies), no backoff.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::{api::ApiClient, store::LocalStore};
//!
//! let store = LocalStore::open(".shopfront")?;
//! let api = ApiClient::new(&config.api_url, store);
//!
//! let products = api.list_products(Some("Electronics"), None).await?;
//! let order = api.create_order(cart.lines()).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use shopfront_core::{CartLine, Order, OrderId, Product, ProductId, User};

use crate::catalog::ALL_CATEGORIES;
use crate::store::{LocalStore, StoreError, keys};

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection, I/O, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend returned a non-success status. Carries the
    /// backend-supplied message when the error envelope was parseable,
    /// otherwise a generic status-derived message.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend message or `HTTP <status>` fallback.
        message: String,
    },

    /// The response was successful but the envelope carried no data.
    #[error("response envelope has no data")]
    MissingData,

    /// Reading the stored bearer token failed.
    #[error("local store error: {0}")]
    Store(#[from] StoreError),
}

/// Successful login/register payload.
#[derive(Clone, Deserialize)]
pub struct AuthPayload {
    /// The authenticated account.
    pub user: User,
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

impl std::fmt::Debug for AuthPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPayload")
            .field("user", &self.user)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Response envelope wrapping every backend payload.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

/// Cached API responses.
#[derive(Clone)]
enum CacheValue {
    Product(Box<Product>),
    Categories(Arc<Vec<String>>),
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the backend commerce API.
///
/// Cheap to clone; clones share the HTTP connection pool, cache, and local
/// store handle.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    store: LocalStore,
    cache: Cache<String, CacheValue>,
}

impl ApiClient {
    /// Create a new API client against `base_url` (including the `/api`
    /// prefix), reading the bearer token from `store`.
    #[must_use]
    pub fn new(base_url: &Url, store: LocalStore) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                store,
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Send a request, attaching the stored bearer token if present, and
    /// decode the response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.inner.store.get::<String>(keys::AUTH_TOKEN)? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            debug!(
                status = %status,
                body = %snippet(&response_text),
                "backend returned non-success status"
            );
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&response_text)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %snippet(&response_text),
                "failed to parse backend response"
            );
            ApiError::Parse(e)
        })?;

        envelope.data.ok_or(ApiError::MissingData)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// List products, optionally filtered server-side by category and
    /// search text.
    ///
    /// A category of `"All"` is treated as no filter and not sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, ApiError> {
        let mut request = self.inner.http.get(self.endpoint("products"));

        if let Some(category) = category.filter(|c| *c != ALL_CATEGORIES) {
            request = request.query(&[("category", category)]);
        }
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            request = request.query(&[("search", search)]);
        }

        self.execute(request).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok(*product);
        }

        let request = self.inner.http.get(self.endpoint(&format!("products/{id}")));
        let product: Product = self.execute(request).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// List the category names known to the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for categories");
            return Ok(categories.as_ref().clone());
        }

        let request = self.inner.http.get(self.endpoint("products/categories"));
        let categories: Vec<String> = self.execute(request).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(Arc::new(categories.clone())))
            .await;

        Ok(categories)
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an error on wrong credentials or request failure. Callers in
    /// the session layer flatten this to a generic message.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint("auth/login"))
            .json(&json!({ "email": email, "password": password }));
        self.execute(request).await
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate email, validation failure, or request
    /// failure.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthPayload, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint("auth/register"))
            .json(&json!({ "email": email, "password": password, "name": name }));
        self.execute(request).await
    }

    /// Fetch the profile for the stored bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid token is attached or the request fails.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<User, ApiError> {
        let request = self.inner.http.get(self.endpoint("auth/profile"));
        self.execute(request).await
    }

    // =========================================================================
    // Order Methods
    // =========================================================================

    /// Submit the given cart lines as a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is unauthenticated, stock cannot be
    /// fulfilled, or the request fails. The caller's cart is not touched
    /// here.
    #[instrument(skip_all, fields(lines = lines.len()))]
    pub async fn create_order(&self, lines: &[CartLine]) -> Result<Order, ApiError> {
        let request = self
            .inner
            .http
            .post(self.endpoint("orders"))
            .json(&json!({ "items": lines }));
        self.execute(request).await
    }

    /// List the authenticated user's orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is unauthenticated or the request
    /// fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let request = self.inner.http.get(self.endpoint("orders"));
        self.execute(request).await
    }

    /// Fetch a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist, belongs to another
    /// user, or the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        let request = self.inner.http.get(self.endpoint(&format!("orders/{id}")));
        self.execute(request).await
    }
}

/// Truncate a response body for log output.
fn snippet(text: &str) -> String {
    text.chars().take(500).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true, "data": ["Books", "Sports"]}"#).unwrap();
        assert_eq!(envelope.data.unwrap(), vec!["Books", "Sports"]);
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_envelope_error_shape() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .unwrap();
        assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_status_error_display_uses_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Product not found: 99".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: 99");
    }

    #[test]
    fn test_auth_payload_debug_redacts_token() {
        let payload: AuthPayload = serde_json::from_str(
            r#"{"user": {"id": "1", "name": "Ada", "email": "ada@example.com"}, "token": "tok-secret"}"#,
        )
        .unwrap();

        let debug_output = format!("{payload:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("tok-secret"));
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(2000);
        assert_eq!(snippet(&long).len(), 500);
    }
}
