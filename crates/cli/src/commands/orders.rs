//! Checkout and order history commands.

use shopfront_client::{App, AppError, CheckoutOutcome};
use shopfront_core::{Order, OrderId};

use super::format_price;

/// Submit the cart as a new order.
pub async fn checkout(app: &mut App) -> Result<(), AppError> {
    // Resolve the stored session before the auth gate.
    app.start().await?;

    let outcome = app.checkout().await?;

    #[allow(clippy::print_stdout)]
    {
        match outcome {
            CheckoutOutcome::Placed(order) => {
                println!("Order placed successfully!");
                print_order(&order);
            }
            CheckoutOutcome::AuthRequired => {
                println!("Please log in before checking out (shopfront login).");
            }
            CheckoutOutcome::EmptyCart => println!("Your cart is empty."),
        }
    }
    Ok(())
}

/// List the authenticated user's orders.
pub async fn list(app: &App) -> Result<(), AppError> {
    let orders = app.orders().await?;

    #[allow(clippy::print_stdout)]
    {
        if orders.is_empty() {
            println!("No orders yet.");
        }
        for order in &orders {
            println!(
                "{:>4}  {:<12} {:>10}  {}",
                order.id,
                order.status,
                format_price(order.total),
                order.created_at,
            );
        }
    }
    Ok(())
}

/// Show a single order.
pub async fn show(app: &App, id: &str) -> Result<(), AppError> {
    let order = app.order(&OrderId::new(id)).await?;

    #[allow(clippy::print_stdout)]
    {
        print_order(&order);
    }
    Ok(())
}

fn print_order(order: &Order) {
    #[allow(clippy::print_stdout)]
    {
        println!(
            "Order {} - {} - placed {}",
            order.id, order.status, order.created_at
        );
        for line in &order.items {
            let name = line
                .product
                .as_ref()
                .map_or_else(|| format!("product {}", line.product_id), |p| p.name.clone());
            println!(
                "  {:<36} {:>3} x {:>9} = {:>10}",
                name,
                line.quantity,
                format_price(line.price),
                format_price(line.subtotal),
            );
        }
        println!("Total: {}", format_price(order.total));
    }
}
