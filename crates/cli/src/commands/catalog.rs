//! Catalog browsing commands.

use shopfront_client::{App, AppError};

use super::format_price;

/// Load the catalog and print the filtered view.
pub async fn browse(
    app: &mut App,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<(), AppError> {
    app.start().await?;

    if let Some(category) = category {
        app.catalog_mut().set_category(category);
    }
    if let Some(search) = search {
        app.catalog_mut().set_query(search);
    }

    let visible = app.catalog().visible();

    #[allow(clippy::print_stdout)]
    {
        if visible.is_empty() {
            println!("No products found matching your criteria.");
        } else {
            for product in &visible {
                println!(
                    "{:>4}  {:<36} {:>9}  {:<12} stock {:>3}  {:.1}* ({})",
                    product.id,
                    product.name,
                    format_price(product.price),
                    product.category,
                    product.stock,
                    product.rating,
                    product.reviews,
                );
            }
            println!("{} product(s)", visible.len());
        }
    }

    Ok(())
}

/// Print the category names known to the backend.
pub async fn categories(app: &App) -> Result<(), AppError> {
    let categories = app.api().list_categories().await?;

    #[allow(clippy::print_stdout)]
    {
        for category in &categories {
            println!("{category}");
        }
    }

    Ok(())
}
