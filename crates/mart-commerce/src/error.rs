//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A product snapshot failed validation at the add-to-cart boundary.
    /// The cart is left unchanged.
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    /// A non-positive quantity was passed where a positive one is required.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// An amount in one currency met an amount in another.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// An order cannot be placed from an empty cart.
    #[error("Cannot place an order from an empty cart")]
    EmptyOrder,

    /// An order status transition that the lifecycle does not allow.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidOrderTransition {
        from: &'static str,
        to: &'static str,
    },
}
