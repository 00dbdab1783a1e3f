//! Order capture and lifecycle.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, LineItem};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId, UserId};
use crate::money::{Currency, Money};

/// Delivery estimate window: one week from placement.
pub const DELIVERY_WINDOW_SECS: i64 = 7 * 24 * 60 * 60;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and confirmed.
    #[default]
    Confirmed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Confirmed)
    }

    /// Check whether the lifecycle allows moving to `next`.
    ///
    /// Confirmed -> Shipped -> Delivered, with cancellation only before
    /// shipping.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Confirmed, OrderStatus::Shipped)
                | (OrderStatus::Confirmed, OrderStatus::Cancelled)
                | (OrderStatus::Shipped, OrderStatus::Delivered)
        )
    }
}

/// A line captured into an order. Prices are frozen at placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at placement.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price actually charged (the cart's effective price).
    pub unit_price: Money,
    /// Line total.
    pub total_price: Money,
}

impl From<&LineItem> for OrderLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.effective_unit_price(),
            total_price: item.line_total(),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Customer, when known.
    pub user_id: Option<UserId>,
    /// Items in the order.
    pub items: Vec<OrderLineItem>,
    /// Order status.
    pub status: OrderStatus,
    /// Shipment tracking identifier.
    pub tracking_id: String,
    /// Order currency.
    pub currency: Currency,
    /// Total charged.
    pub grand_total: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
    /// Unix timestamp of the delivery estimate.
    pub estimated_delivery: i64,
    /// Unix timestamp of the last status change.
    pub updated_at: i64,
}

impl Order {
    /// Capture a cart into a confirmed order.
    ///
    /// The cart is read, not consumed; clearing it afterwards is the
    /// owning layer's decision.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::EmptyOrder`] for an empty cart.
    pub fn from_cart(
        id: OrderId,
        tracking_id: impl Into<String>,
        cart: &Cart,
        user_id: Option<UserId>,
        placed_at: i64,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyOrder);
        }

        let items: Vec<OrderLineItem> = cart.items().iter().map(OrderLineItem::from).collect();
        let totals = cart.totals();

        Ok(Self {
            id,
            user_id,
            items,
            status: OrderStatus::Confirmed,
            tracking_id: tracking_id.into(),
            currency: cart.currency(),
            grand_total: totals.total,
            placed_at,
            estimated_delivery: placed_at + DELIVERY_WINDOW_SECS,
            updated_at: placed_at,
        })
    }

    /// Total item count across lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Move the order to a new status.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::InvalidOrderTransition`] when the
    /// lifecycle does not allow the move.
    pub fn set_status(&mut self, status: OrderStatus, at: i64) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(status) {
            return Err(CommerceError::InvalidOrderTransition {
                from: self.status.as_str(),
                to: status.as_str(),
            });
        }
        self.status = status;
        self.updated_at = at;
        Ok(())
    }

    /// Cancel the order if it has not shipped. Returns whether it was
    /// cancelled.
    pub fn cancel(&mut self, at: i64) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        self.updated_at = at;
        true
    }
}
