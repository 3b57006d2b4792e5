//! Core domain types shared across Shopfront components.

mod cart;
mod email;
mod id;
mod order;
mod product;
mod status;
mod user;

pub use cart::CartLine;
pub use email::{Email, EmailError};
pub use id::{OrderId, ProductId, UserId};
pub use order::{Order, OrderLine};
pub use product::Product;
pub use status::OrderStatus;
pub use user::User;
