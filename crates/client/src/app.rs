//! Orchestration shell.
//!
//! Wires the API client, session, cart, and catalog view together and owns
//! the two multi-component flows: startup sequencing and checkout. A
//! frontend holds one [`App`], reads state through its accessors, and
//! funnels every user action through its operations.

use std::time::Instant;

use tracing::{info, warn};

use shopfront_core::{Order, OrderId, User};

use crate::api::ApiClient;
use crate::cart::Cart;
use crate::catalog::CatalogView;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::sample::sample_catalog;
use crate::session::Session;
use crate::store::LocalStore;

/// Result of a checkout attempt that did not fail outright.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The order was accepted; the cart has been cleared.
    Placed(Order),
    /// The session is not authenticated; nothing was submitted. The
    /// frontend should prompt for authentication.
    AuthRequired,
    /// The cart is empty; nothing was submitted.
    EmptyCart,
}

/// The storefront application shell.
pub struct App {
    config: ClientConfig,
    api: ApiClient,
    session: Session,
    cart: Cart,
    catalog: CatalogView,
}

impl App {
    /// Build the shell: open the local store, construct the API client,
    /// and rehydrate the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store cannot be opened or read.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store = LocalStore::open(&config.data_dir)?;
        let api = ApiClient::new(&config.api_url, store.clone());
        let session = Session::new(store.clone());
        let cart = Cart::load(store)?;

        Ok(Self {
            config,
            api,
            session,
            cart,
            catalog: CatalogView::new(),
        })
    }

    /// Run the startup sequence.
    ///
    /// 1. Resolve a stored session token, silently discarding it on
    ///    failure.
    /// 2. Load the catalog from the backend; on failure fall back to the
    ///    static sample catalog.
    /// 3. If a splash delay is configured, wait out the remainder of it
    ///    (cosmetic minimum loading duration, disabled by default).
    ///
    /// # Errors
    ///
    /// Returns an error only for local store failures; backend failures
    /// degrade as described above.
    pub async fn start(&mut self) -> Result<()> {
        let started = Instant::now();

        self.session.resolve(&self.api).await?;

        match self.api.list_products(None, None).await {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded from backend");
                self.catalog.set_products(products);
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed; using sample data");
                self.catalog.set_products(sample_catalog());
            }
        }

        let elapsed = started.elapsed();
        if let Some(remaining) = self.config.splash_delay.checked_sub(elapsed) {
            if !remaining.is_zero() {
                tokio::time::sleep(remaining).await;
            }
        }

        Ok(())
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in. See [`Session::login`].
    ///
    /// # Errors
    ///
    /// Returns the flattened auth error on failure.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        Ok(self.session.login(&self.api, email, password).await?)
    }

    /// Register a new account. See [`Session::register`].
    ///
    /// # Errors
    ///
    /// Returns the flattened auth error on failure.
    pub async fn register(&mut self, email: &str, password: &str, name: &str) -> Result<&User> {
        Ok(self.session.register(&self.api, email, password, name).await?)
    }

    /// Log out: clear the session token, the cached user, and the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the local store cannot be updated.
    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.cart.clear()?;
        Ok(())
    }

    // =========================================================================
    // Checkout and orders
    // =========================================================================

    /// Attempt to check out the current cart.
    ///
    /// Requires an authenticated session and a non-empty cart; the
    /// corresponding [`CheckoutOutcome`] variants report those gates
    /// without submitting anything. On success the cart is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails; the cart is left
    /// untouched so the user can retry.
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome> {
        if !self.session.is_authenticated() {
            return Ok(CheckoutOutcome::AuthRequired);
        }
        if self.cart.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let order = self.api.create_order(self.cart.lines()).await?;
        info!(order = %order.id, "order placed");
        self.cart.clear()?;
        Ok(CheckoutOutcome::Placed(order))
    }

    /// The authenticated user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the caller is unauthenticated or the request
    /// fails.
    pub async fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.api.list_orders().await?)
    }

    /// A single order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or the request fails.
    pub async fn order(&self, id: &OrderId) -> Result<Order> {
        Ok(self.api.get_order(id).await?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The backend API client.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The cart, read-only.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The cart, for mutation.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The catalog view, read-only.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    /// The catalog view, for filter mutation.
    pub const fn catalog_mut(&mut self) -> &mut CatalogView {
        &mut self.catalog
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shopfront_core::{Product, ProductId};

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        // Port 9 (discard) is never listening, so every backend call fails.
        let config = ClientConfig::new("http://127.0.0.1:9/api", dir.path()).unwrap();
        let app = App::new(config).unwrap();
        (dir, app)
    }

    fn product() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Desk Lamp".to_string(),
            description: String::new(),
            price: Decimal::new(14999, 2),
            image: String::new(),
            category: "Home".to_string(),
            stock: 12,
            rating: 4.3,
            reviews: 78,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_checkout_unauthenticated_submits_nothing() {
        let (_dir, mut app) = app();
        app.cart_mut().add(product(), 1).unwrap();

        // The API endpoint is unreachable, so reaching it would error; the
        // auth gate must short-circuit first.
        let outcome = app.checkout().await.unwrap();
        assert!(matches!(outcome, CheckoutOutcome::AuthRequired));
        assert_eq!(app.cart().item_count(), 1);
    }

    #[tokio::test]
    async fn test_start_falls_back_to_sample_catalog() {
        let (_dir, mut app) = app();
        app.start().await.unwrap();

        assert_eq!(app.catalog().products().len(), 8);
        assert!(!app.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_cart() {
        let (_dir, mut app) = app();
        app.cart_mut().add(product(), 2).unwrap();

        app.logout().unwrap();
        assert!(app.cart().is_empty());
        assert!(!app.session().is_authenticated());
    }
}
