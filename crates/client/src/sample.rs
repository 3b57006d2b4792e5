//! Static fallback catalog.
//!
//! Used when the backend catalog cannot be loaded at startup, so the
//! storefront stays browsable (cart and filtering keep working; anything
//! requiring the backend will still fail per-operation).

use rust_decimal::Decimal;

use shopfront_core::{Product, ProductId};

/// The built-in sample catalog.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Wireless Bluetooth Headphones",
            "Premium wireless headphones with active noise cancellation and 30-hour battery life.",
            Decimal::new(29999, 2),
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            15,
            4.8,
            234,
        ),
        product(
            "2",
            "Smart Watch Series 8",
            "Advanced smartwatch with health monitoring, GPS, and cellular connectivity.",
            Decimal::new(39999, 2),
            "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            8,
            4.6,
            567,
        ),
        product(
            "3",
            "Organic Cotton T-Shirt",
            "Comfortable and sustainable organic cotton t-shirt in various colors.",
            Decimal::new(2999, 2),
            "https://images.pexels.com/photos/1183266/pexels-photo-1183266.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Clothing",
            25,
            4.4,
            89,
        ),
        product(
            "4",
            "Professional Camera Lens",
            "85mm f/1.4 portrait lens with exceptional image quality and bokeh.",
            Decimal::new(79999, 2),
            "https://images.pexels.com/photos/90946/pexels-photo-90946.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            5,
            4.9,
            156,
        ),
        product(
            "5",
            "Bestselling Novel",
            "Award-winning fiction novel that has captivated readers worldwide.",
            Decimal::new(1499, 2),
            "https://images.pexels.com/photos/159866/books-book-pages-read-literature-159866.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Books",
            50,
            4.7,
            1234,
        ),
        product(
            "6",
            "Yoga Mat Premium",
            "Non-slip yoga mat with superior grip and cushioning for all types of yoga.",
            Decimal::new(7999, 2),
            "https://images.pexels.com/photos/6740818/pexels-photo-6740818.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Sports",
            18,
            4.5,
            203,
        ),
        product(
            "7",
            "Minimalist Desk Lamp",
            "Modern LED desk lamp with adjustable brightness and wireless charging base.",
            Decimal::new(14999, 2),
            "https://images.pexels.com/photos/1112598/pexels-photo-1112598.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Home",
            12,
            4.3,
            78,
        ),
        product(
            "8",
            "Running Shoes Pro",
            "High-performance running shoes with advanced cushioning and breathable mesh.",
            Decimal::new(15999, 2),
            "https://images.pexels.com/photos/1598505/pexels-photo-1598505.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Sports",
            22,
            4.6,
            445,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: Decimal,
    image: &str,
    category: &str,
    stock: u32,
    rating: f64,
    reviews: u64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: image.to_string(),
        category: category.to_string(),
        stock,
        rating,
        reviews,
        created_at: None,
    }
}
