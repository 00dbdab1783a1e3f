//! Catalog types: products, categories, stock.

mod category;
mod product;
mod stock;

pub use category::{build_tree, Category, CategoryNode};
pub use product::Product;
pub use stock::StockLevel;
