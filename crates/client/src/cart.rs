//! Shopping cart state.
//!
//! An ordered sequence of cart lines, keyed by product ID (one line per
//! product). Every mutation persists the whole cart synchronously to the
//! local store under the fixed `cart` key, and `Cart::load` rehydrates
//! from the same key, so the in-memory cart and the persisted cart are one
//! source of truth - checkout consumes [`Cart::lines`], not a second read
//! from storage.
//!
//! Invariant: no line ever has quantity 0; a line reduced to 0 is removed.
//! Stock limits are deliberately NOT enforced here - the backend rejects
//! unfulfillable orders at checkout and outer surfaces can consult
//! `Product::can_fulfill`.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use shopfront_core::{CartLine, Product, ProductId};

use crate::store::{LocalStore, StoreError, keys};

/// The shopping cart.
#[derive(Debug)]
pub struct Cart {
    store: LocalStore,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Rehydrate the cart from `store`.
    ///
    /// A missing record yields an empty cart. A corrupt record is treated
    /// as empty with a warning rather than failing startup.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the record exists but cannot be read.
    pub fn load(store: LocalStore) -> Result<Self, StoreError> {
        let lines = match store.get::<Vec<CartLine>>(keys::CART) {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(StoreError::Serde(e)) => {
                warn!(error = %e, "persisted cart is corrupt; starting empty");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { store, lines })
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `unit price x quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (not the number of lines).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the product exists its quantity is incremented,
    /// otherwise a new line is appended. A zero quantity is a no-op so the
    /// quantity invariant holds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            debug!(product = %product.id, "ignoring add of zero quantity");
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }

        self.persist()
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of 0 removes the line. Setting a quantity for an absent
    /// product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return self.remove(id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == *id) {
            line.quantity = quantity;
            self.persist()?;
        }
        Ok(())
    }

    /// Remove the line for `id`. Idempotent; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), StoreError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != *id);
        if self.lines.len() != before {
            self.persist()?;
        }
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.lines.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.put(keys::CART, &self.lines)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            image: String::new(),
            category: "Electronics".to_string(),
            stock: 10,
            rating: 4.0,
            reviews: 1,
            created_at: None,
        }
    }

    fn cart() -> (tempfile::TempDir, Cart) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        let cart = Cart::load(store).unwrap();
        (dir, cart)
    }

    #[test]
    fn test_add_merges_lines_by_product() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::new(1000, 2)), 1).unwrap();
        cart.add(product("1", Decimal::new(1000, 2)), 2).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 3);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::ONE), 2).unwrap();
        cart.add(product("2", Decimal::ONE), 3).unwrap();

        // Two lines, five items.
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_total_sums_line_totals() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::new(29999, 2)), 1).unwrap();
        cart.add(product("2", Decimal::new(1499, 2)), 2).unwrap();

        assert_eq!(cart.total(), Decimal::new(32997, 2));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::ONE), 4).unwrap();
        cart.set_quantity(&ProductId::new("1"), 0).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_no_sequence_leaves_zero_quantity_lines() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::ONE), 0).unwrap();
        cart.add(product("1", Decimal::ONE), 2).unwrap();
        cart.set_quantity(&ProductId::new("1"), 1).unwrap();
        cart.add(product("2", Decimal::ONE), 1).unwrap();
        cart.set_quantity(&ProductId::new("2"), 0).unwrap();
        cart.remove(&ProductId::new("missing")).unwrap();

        assert!(cart.lines().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::ONE), 1).unwrap();
        cart.remove(&ProductId::new("1")).unwrap();
        cart.remove(&ProductId::new("1")).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_cart_and_store() {
        let (_dir, mut cart) = cart();
        cart.add(product("1", Decimal::ONE), 1).unwrap();
        cart.clear().unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        let mut cart = Cart::load(store.clone()).unwrap();
        cart.add(product("1", Decimal::new(7999, 2)), 2).unwrap();
        drop(cart);

        let reloaded = Cart::load(store).unwrap();
        assert_eq!(reloaded.item_count(), 2);
        assert_eq!(reloaded.total(), Decimal::new(15998, 2));
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cart.json"), b"{definitely not json").unwrap();

        let store = LocalStore::open(dir.path()).unwrap();
        let cart = Cart::load(store).unwrap();
        assert!(cart.is_empty());
    }
}
