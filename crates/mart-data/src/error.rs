//! Data layer error types.

use mart_commerce::{CategoryId, CommerceError, OrderId, ProductId};
use thiserror::Error;

/// Errors from the data layer.
#[derive(Error, Debug)]
pub enum DataError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Embedded seed data failed to parse.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
