//! Stock availability.

use serde::{Deserialize, Serialize};

/// Stock shown to customers, and checked by the owning layer before an
/// add-to-cart. The cart itself never enforces stock limits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StockLevel {
    /// Units available for purchase.
    pub available: i64,
    /// Threshold under which the storefront shows a "only a few left"
    /// nudge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,
}

impl StockLevel {
    /// Create a stock level with the given availability.
    pub fn new(available: i64) -> Self {
        Self {
            available,
            low_stock_threshold: None,
        }
    }

    /// Check if any units are available.
    pub fn is_in_stock(&self) -> bool {
        self.available > 0
    }

    /// Check if a requested quantity can be satisfied.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity > 0 && self.available >= quantity
    }

    /// Check if stock is at or below the low-stock threshold.
    pub fn is_low(&self) -> bool {
        self.low_stock_threshold
            .map(|threshold| self.available > 0 && self.available <= threshold)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_checks() {
        let stock = StockLevel::new(5);
        assert!(stock.is_in_stock());
        assert!(stock.can_fulfill(5));
        assert!(!stock.can_fulfill(6));
        assert!(!stock.can_fulfill(0));
    }

    #[test]
    fn out_of_stock() {
        let stock = StockLevel::new(0);
        assert!(!stock.is_in_stock());
        assert!(!stock.can_fulfill(1));
    }

    #[test]
    fn low_stock_needs_a_threshold() {
        let mut stock = StockLevel::new(3);
        assert!(!stock.is_low());

        stock.low_stock_threshold = Some(5);
        assert!(stock.is_low());

        stock.available = 10;
        assert!(!stock.is_low());
    }
}
