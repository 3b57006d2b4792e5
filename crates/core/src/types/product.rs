//! Catalog product model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A product in the catalog.
///
/// Immutable once loaded; sourced from the backend API or from the static
/// sample catalog when the backend is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Longer description, searched by the catalog filter.
    pub description: String,
    /// Unit price in the store currency. The backend encodes prices as JSON
    /// numbers, so this round-trips through `rust_decimal`'s float support.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL.
    pub image: String,
    /// Category name (one of a small backend-defined set).
    pub category: String,
    /// Units in stock.
    pub stock: u32,
    /// Average review rating, 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u64,
    /// Creation timestamp (naive UTC, as the backend emits it). Absent for
    /// sample-catalog products.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Product {
    /// Whether any units are in stock.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the current stock can cover `quantity` units.
    #[must_use]
    pub const fn can_fulfill(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Wireless Bluetooth Headphones".to_string(),
            description: "Premium wireless headphones.".to_string(),
            price: Decimal::new(29999, 2),
            image: "https://example.com/headphones.jpg".to_string(),
            category: "Electronics".to_string(),
            stock,
            rating: 4.8,
            reviews: 234,
            created_at: None,
        }
    }

    #[test]
    fn test_stock_helpers() {
        let p = product(5);
        assert!(p.is_in_stock());
        assert!(p.can_fulfill(5));
        assert!(!p.can_fulfill(6));

        let empty = product(0);
        assert!(!empty.is_in_stock());
        assert!(!empty.can_fulfill(1));
        assert!(empty.can_fulfill(0));
    }

    #[test]
    fn test_deserialize_backend_shape() {
        // Prices arrive as JSON numbers; created_at is a naive ISO timestamp.
        let json = r#"{
            "id": "4",
            "name": "Professional Camera Lens",
            "description": "85mm f/1.4 portrait lens.",
            "price": 799.99,
            "image": "https://example.com/lens.jpg",
            "category": "Electronics",
            "stock": 5,
            "rating": 4.9,
            "reviews": 156,
            "created_at": "2024-03-01T12:30:00.123456"
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new("4"));
        assert_eq!(p.price, Decimal::new(79999, 2));
        assert!(p.created_at.is_some());
    }

    #[test]
    fn test_deserialize_without_created_at() {
        let json = r#"{
            "id": "1",
            "name": "n",
            "description": "d",
            "price": 1.5,
            "image": "i",
            "category": "Books",
            "stock": 1,
            "rating": 4.0,
            "reviews": 2
        }"#;

        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.created_at.is_none());
    }
}
