//! Storefront domain types and logic for QuickMart.
//!
//! This crate provides the building blocks of a client-side storefront:
//!
//! - **Cart**: an ordered ledger of line items with quantity merging,
//!   derived totals, and (behind the `storage` feature) write-through
//!   persistence to a key-value store
//! - **Catalog**: products, categories, stock levels, reviews
//! - **Search**: in-memory filtering, sorting, and pagination
//! - **Orders**: order capture from a cart with tracking and a delivery
//!   estimate
//!
//! # Example
//!
//! ```
//! use mart_commerce::prelude::*;
//!
//! let snapshot = ProductSnapshot {
//!     product_id: ProductId::new("prod-1"),
//!     name: "Wireless Headphones".to_string(),
//!     unit_price: Some(Money::new(4999_00, Currency::INR)),
//!     discounted_unit_price: Some(Money::new(3999_00, Currency::INR)),
//!     available_stock: 12,
//! };
//!
//! let mut cart = Cart::new(Currency::INR);
//! cart.add_item(snapshot, 2).unwrap();
//!
//! let totals = cart.totals();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.total, Money::new(7998_00, Currency::INR));
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod reviews;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem, ProductSnapshot};
    #[cfg(feature = "storage")]
    pub use crate::cart::{CartStore, PersistentCart};

    // Catalog
    pub use crate::catalog::{Category, CategoryNode, Product, StockLevel};

    // Reviews
    pub use crate::reviews::{RatingSummary, Review};

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};

    // Orders
    pub use crate::order::{Order, OrderLineItem, OrderStatus};
}
