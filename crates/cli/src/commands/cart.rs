//! Cart management commands.
//!
//! The cart persists in the local store between invocations, so these
//! commands mutate it without touching the backend (except `add`, which
//! fetches the product being added).

use shopfront_client::{App, AppError};
use shopfront_core::ProductId;

use super::format_price;

/// Print the cart contents.
pub fn show(app: &App) {
    let cart = app.cart();

    #[allow(clippy::print_stdout)]
    {
        if cart.is_empty() {
            println!("Your cart is empty.");
            return;
        }

        for line in cart.lines() {
            println!(
                "{:>4}  {:<36} {:>3} x {:>9} = {:>10}",
                line.product.id,
                line.product.name,
                line.quantity,
                format_price(line.product.price),
                format_price(line.line_total()),
            );
        }
        println!(
            "{} item(s), total {}",
            cart.item_count(),
            format_price(cart.total())
        );
    }
}

/// Fetch a product and add it to the cart.
pub async fn add(app: &mut App, product_id: &str, quantity: u32) -> Result<(), AppError> {
    let id = ProductId::new(product_id);
    let api = app.api().clone();
    let product = api.get_product(&id).await?;

    let name = product.name.clone();
    app.cart_mut().add(product, quantity)?;

    #[allow(clippy::print_stdout)]
    {
        println!("Added {quantity} x {name} to the cart.");
    }
    show(app);
    Ok(())
}

/// Set a cart line's quantity (0 removes it).
pub fn set_quantity(app: &mut App, product_id: &str, quantity: u32) -> Result<(), AppError> {
    app.cart_mut()
        .set_quantity(&ProductId::new(product_id), quantity)?;
    show(app);
    Ok(())
}

/// Remove a cart line.
pub fn remove(app: &mut App, product_id: &str) -> Result<(), AppError> {
    app.cart_mut().remove(&ProductId::new(product_id))?;
    show(app);
    Ok(())
}

/// Empty the cart.
pub fn clear(app: &mut App) -> Result<(), AppError> {
    app.cart_mut().clear()?;

    #[allow(clippy::print_stdout)]
    {
        println!("Cart cleared.");
    }
    Ok(())
}
