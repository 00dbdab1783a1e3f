//! Seeded in-memory data layer for QuickMart.
//!
//! Repositories over static catalog data, playing the role a backend
//! would: product lookup and search, the category tree, and order
//! placement with tracking and a delivery estimate. Everything is a plain
//! synchronous call on in-memory data.
//!
//! # Example
//!
//! ```
//! use mart_data::ProductRepository;
//!
//! let products = ProductRepository::with_seed_data().unwrap();
//! assert!(!products.all().is_empty());
//! ```

mod categories;
mod error;
mod orders;
mod products;
mod seed;

pub use categories::CategoryRepository;
pub use error::DataError;
pub use orders::OrderRepository;
pub use products::ProductRepository;
