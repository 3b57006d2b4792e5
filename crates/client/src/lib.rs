//! Shopfront client - headless storefront logic.
//!
//! This crate is the stateful core behind any Shopfront frontend. It owns:
//!
//! - [`api`] - typed REST client for the backend commerce API
//! - [`session`] - authentication state (token resolution, login, logout)
//! - [`cart`] - the shopping cart, persisted through the local store on
//!   every mutation
//! - [`catalog`] - category + free-text filtering over the loaded catalog
//! - [`app`] - the orchestration shell wiring the above together (startup
//!   sequencing, checkout flow)
//! - [`store`] - durable client-local key-value storage (the stand-in for
//!   browser local storage)
//!
//! Presentation is an external collaborator: frontends read state through
//! [`app::App`] accessors and funnel every mutation through its operations.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::{app::App, config::ClientConfig};
//!
//! let mut app = App::new(ClientConfig::from_env()?)?;
//! app.start().await?;
//!
//! let first = app.catalog().visible().first().cloned().cloned();
//! if let Some(product) = first {
//!     app.cart_mut().add(product, 1)?;
//! }
//! match app.checkout().await? {
//!     CheckoutOutcome::Placed(order) => println!("order {}", order.id),
//!     other => println!("{other:?}"),
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod sample;
pub mod session;
pub mod store;

pub use api::{ApiClient, ApiError};
pub use app::{App, CheckoutOutcome};
pub use cart::Cart;
pub use catalog::CatalogView;
pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use session::{AuthError, AuthState, Session};
pub use store::LocalStore;
