//! Authentication commands.

use shopfront_client::{App, AppError};

/// Log in and persist the session token.
pub async fn login(app: &mut App, email: &str, password: &str) -> Result<(), AppError> {
    let user = app.login(email, password).await?;
    let name = user.name.clone();

    #[allow(clippy::print_stdout)]
    {
        println!("Welcome back, {name}!");
    }
    Ok(())
}

/// Register a new account and log it in.
pub async fn register(
    app: &mut App,
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), AppError> {
    let user = app.register(email, password, name).await?;
    let name = user.name.clone();

    #[allow(clippy::print_stdout)]
    {
        println!("Account created. Welcome, {name}!");
    }
    Ok(())
}

/// Log out: discard the session token and clear the cart.
pub fn logout(app: &mut App) -> Result<(), AppError> {
    app.logout()?;

    #[allow(clippy::print_stdout)]
    {
        println!("Logged out.");
    }
    Ok(())
}

/// Show the account behind the stored session token.
pub async fn whoami(app: &App) -> Result<(), AppError> {
    let user = app.api().profile().await?;

    #[allow(clippy::print_stdout)]
    {
        println!("{} <{}> (id {})", user.name, user.email, user.id);
    }
    Ok(())
}
