//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;

use rust_decimal::Decimal;

/// Format a decimal amount as a price string.
pub fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}
