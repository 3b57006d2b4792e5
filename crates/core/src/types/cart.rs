//! Cart line model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Product;

/// One product plus its selected quantity within a cart.
///
/// This is both the in-memory representation and the wire shape: the
/// persisted cart record and the checkout `items` payload are sequences of
/// cart lines. Invariant (maintained by the cart container): `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The selected product.
    pub product: Product,
    /// Units selected. Always at least 1; a line reduced to 0 is removed
    /// from the cart rather than retained.
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
