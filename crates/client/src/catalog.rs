//! Catalog view and filter state.
//!
//! Derives the visible product subset from the full catalog given a
//! selected category and a free-text query. No pagination, no ranking -
//! the visible set preserves catalog order.

use shopfront_core::Product;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Filter state over the loaded catalog.
#[derive(Debug, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    category: Option<String>,
    query: String,
}

impl CatalogView {
    /// Create an empty view with no filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            category: None,
            query: String::new(),
        }
    }

    /// Replace the full product set.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// The full, unfiltered catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Select a category. `"All"` clears the category filter.
    pub fn set_category(&mut self, category: &str) {
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
    }

    /// The selected category, `"All"` if none.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    /// Set the free-text query. Matching is a case-insensitive substring
    /// test against product name and description.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// The current query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Clear both filters.
    pub fn clear_filters(&mut self) {
        self.category = None;
        self.query.clear();
    }

    /// The filtered products, in catalog order.
    ///
    /// A product is visible when its category matches the selected one (or
    /// no category is selected) and the query is empty or a
    /// case-insensitive substring of its name or description.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.query.to_lowercase();
        self.products
            .iter()
            .filter(|product| self.category.as_ref().is_none_or(|c| product.category == *c))
            .filter(|product| {
                needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
