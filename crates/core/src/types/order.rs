//! Order models.
//!
//! Orders are created by the backend at checkout and are read-only to the
//! client. The backend emits order payloads in camelCase.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderStatus, Product, ProductId, UserId};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend order ID.
    pub id: OrderId,
    /// Owner of the order.
    pub user_id: UserId,
    /// Order total at purchase time.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Creation timestamp (naive UTC).
    pub created_at: NaiveDateTime,
    /// Last status-change timestamp (naive UTC).
    pub updated_at: NaiveDateTime,
    /// Ordered lines.
    pub items: Vec<OrderLine>,
}

/// A single line within an order: a product snapshot at its purchase-time
/// unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Backend line ID.
    pub id: i64,
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price at purchase time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Line subtotal (`price * quantity`), as computed by the backend.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Product snapshot, when the backend still knows the product.
    #[serde(default)]
    pub product: Option<Product>,
}
