//! Shopfront CLI - command-line storefront driver.
//!
//! A thin presentation layer over `shopfront-client`: every command reads
//! state through the shell's accessors and funnels mutations through its
//! operations. Client-local state (session token, cart) lives in the
//! configured data directory and survives between invocations.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (falls back to sample data if the backend is down)
//! shopfront browse --category Electronics --search camera
//!
//! # Manage the cart
//! shopfront cart add 4 --quantity 2
//! shopfront cart show
//!
//! # Authenticate and check out
//! shopfront login --email ada@example.com --password hunter2
//! shopfront checkout
//!
//! # Order history
//! shopfront orders
//! shopfront orders 3
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use shopfront_client::{App, ClientConfig};

mod commands;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Headless storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Browse {
        /// Category filter ("All" disables it)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search over name and description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List the category names known to the backend
    Categories,
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Log out and clear the cart
    Logout,
    /// Show the account behind the stored session token
    Whoami,
    /// Submit the cart as a new order
    Checkout,
    /// List past orders, or show one by ID
    Orders {
        /// Order ID; lists all orders when omitted
        id: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines, item count, and total
    Show,
    /// Add a product by ID
    Add {
        /// Product ID
        product_id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product ID
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let mut app = App::new(config)?;

    match cli.command {
        Commands::Browse { category, search } => {
            commands::catalog::browse(&mut app, category.as_deref(), search.as_deref()).await?;
        }
        Commands::Categories => commands::catalog::categories(&app).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app),
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&mut app, &product_id, quantity).await?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&mut app, &product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&mut app, &product_id)?,
            CartAction::Clear => commands::cart::clear(&mut app)?,
        },
        Commands::Login { email, password } => {
            commands::auth::login(&mut app, &email, &password).await?;
        }
        Commands::Register {
            email,
            password,
            name,
        } => commands::auth::register(&mut app, &email, &password, &name).await?,
        Commands::Logout => commands::auth::logout(&mut app)?,
        Commands::Whoami => commands::auth::whoami(&app).await?,
        Commands::Checkout => commands::orders::checkout(&mut app).await?,
        Commands::Orders { id } => match id {
            Some(id) => commands::orders::show(&app, &id).await?,
            None => commands::orders::list(&app).await?,
        },
    }
    Ok(())
}
