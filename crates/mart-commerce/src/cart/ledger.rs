//! The cart ledger: an ordered list of line items with derived totals.

use serde::{Deserialize, Serialize};

use crate::cart::{LineItem, ProductSnapshot};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Derived cart aggregates. Computed live from the current items on every
/// read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub item_count: i64,
    /// Sum of line totals at the effective unit price.
    pub total: Money,
}

/// A shopping cart.
///
/// Invariants:
/// - at most one line item per product id
/// - every line has quantity >= 1
/// - lines keep the order in which their products were first added;
///   quantity updates do not reorder
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Rebuild a cart from previously stored line items.
    ///
    /// Stored data crosses a trust boundary, so lines that violate the
    /// cart invariants (blank id, non-positive quantity, duplicate
    /// product, foreign currency) are dropped rather than trusted.
    pub fn hydrate(items: Vec<LineItem>, currency: Currency) -> Self {
        let mut cart = Self::new(currency);
        for item in items {
            let foreign_discount = item
                .discounted_unit_price
                .map(|d| d.currency != currency)
                .unwrap_or(false);
            if item.product_id.is_empty()
                || item.quantity <= 0
                || item.unit_price.currency != currency
                || foreign_discount
                || cart.get(&item.product_id).is_some()
            {
                continue;
            }
            cart.items.push(item);
        }
        cart
    }

    /// Add a product to the cart.
    ///
    /// If a line for the same product already exists, its quantity is
    /// incremented by `quantity` and its captured name/price snapshot is
    /// left untouched. Otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// - [`CommerceError::InvalidQuantity`] if `quantity <= 0`
    /// - [`CommerceError::InvalidItem`] / [`CommerceError::CurrencyMismatch`]
    ///   if the snapshot fails validation
    /// - [`CommerceError::Overflow`] if the merged quantity overflows
    ///
    /// On any error the cart is left exactly as it was.
    pub fn add_item(
        &mut self,
        snapshot: ProductSnapshot,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        // Validate before touching the ledger so a rejection cannot leave
        // a partial mutation behind.
        let item = LineItem::from_snapshot(snapshot, quantity, self.currency)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.items.push(item);
        Ok(())
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line instead. An unknown
    /// product id is a no-op; no line is fabricated. Returns whether the
    /// cart changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| &i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line for a product. Removing an absent product is a
    /// no-op. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compute the derived totals.
    ///
    /// Pure read: totals are summed from the live items at the effective
    /// unit price, saturating at the numeric bounds so this never fails.
    pub fn totals(&self) -> CartTotals {
        let mut item_count = 0_i64;
        let mut total = Money::zero(self.currency);

        for item in &self.items {
            item_count = item_count.saturating_add(item.quantity);
            total = total.saturating_add(&item.line_total());
        }

        CartTotals { item_count, total }
    }

    /// The ordered line items, for rendering.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}
