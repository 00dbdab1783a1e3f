//! CLI commands.

pub mod cart;
pub mod orders;
pub mod products;

pub use cart::CartArgs;
pub use orders::OrderArgs;
pub use products::{ProductArgs, ProductsArgs};
