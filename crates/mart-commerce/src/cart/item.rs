//! Cart line items and the add-to-cart product snapshot.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Product display data as handed over by the catalog at add-to-cart time.
///
/// This is the untrusted shape: prices may be missing and the id may be
/// blank. [`LineItem::from_snapshot`] is the single place where it gets
/// validated; everything past that boundary works with well-typed items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Regular unit price.
    pub unit_price: Option<Money>,
    /// Sale price, when the product is discounted.
    pub discounted_unit_price: Option<Money>,
    /// Stock available at snapshot time. Stock caps are the catalog's
    /// concern; the cart does not enforce them.
    pub available_stock: i64,
}

/// One row in the cart: a product and its requested quantity.
///
/// The name and prices are a snapshot captured when the product was first
/// added; the cart never refreshes them if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Regular unit price at add time.
    pub unit_price: Money,
    /// Sale unit price at add time, if the product was discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_unit_price: Option<Money>,
    /// Requested quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// Validate a product snapshot into a line item.
    ///
    /// Rules:
    /// - the product id must be non-empty
    /// - at least one price must be present; a lone sale price is treated
    ///   as the regular price
    /// - a sale price must not exceed the regular price
    /// - prices must be in the cart currency
    ///
    /// Returns [`CommerceError::InvalidItem`] or
    /// [`CommerceError::CurrencyMismatch`] without any other effect, so a
    /// failed add leaves the cart untouched.
    pub fn from_snapshot(
        snapshot: ProductSnapshot,
        quantity: i64,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        if snapshot.product_id.is_empty() {
            return Err(CommerceError::InvalidItem(
                "product snapshot is missing an id".to_string(),
            ));
        }

        let (unit_price, discounted_unit_price) =
            match (snapshot.unit_price, snapshot.discounted_unit_price) {
                (Some(unit), discounted) => (unit, discounted),
                (None, Some(discounted)) => (discounted, None),
                (None, None) => {
                    return Err(CommerceError::InvalidItem(format!(
                        "product '{}' has no usable price",
                        snapshot.product_id
                    )));
                }
            };

        for price in std::iter::once(&unit_price).chain(discounted_unit_price.iter()) {
            if price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code(),
                    got: price.currency.code(),
                });
            }
        }

        if let Some(discounted) = discounted_unit_price {
            if discounted.amount_minor > unit_price.amount_minor {
                return Err(CommerceError::InvalidItem(format!(
                    "product '{}' has a sale price above its regular price",
                    snapshot.product_id
                )));
            }
        }

        Ok(Self {
            product_id: snapshot.product_id,
            name: snapshot.name,
            unit_price,
            discounted_unit_price,
            quantity,
        })
    }

    /// The price totals are computed from: the sale price when present,
    /// else the regular price.
    pub fn effective_unit_price(&self) -> Money {
        self.discounted_unit_price.unwrap_or(self.unit_price)
    }

    /// Total for this line (effective unit price x quantity), saturating
    /// at the numeric bounds so reads never fail.
    pub fn line_total(&self) -> Money {
        self.effective_unit_price().saturating_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ProductSnapshot {
        ProductSnapshot {
            product_id: ProductId::new("prod-1"),
            name: "Espresso Beans".to_string(),
            unit_price: Some(Money::new(100, Currency::INR)),
            discounted_unit_price: Some(Money::new(80, Currency::INR)),
            available_stock: 10,
        }
    }

    #[test]
    fn from_snapshot_keeps_both_prices() {
        let item = LineItem::from_snapshot(snapshot(), 2, Currency::INR).unwrap();

        assert_eq!(item.unit_price, Money::new(100, Currency::INR));
        assert_eq!(
            item.discounted_unit_price,
            Some(Money::new(80, Currency::INR))
        );
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn missing_id_is_invalid() {
        let mut s = snapshot();
        s.product_id = ProductId::new("");

        let err = LineItem::from_snapshot(s, 1, Currency::INR).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidItem(_)));
    }

    #[test]
    fn missing_both_prices_is_invalid() {
        let mut s = snapshot();
        s.unit_price = None;
        s.discounted_unit_price = None;

        let err = LineItem::from_snapshot(s, 1, Currency::INR).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidItem(_)));
    }

    #[test]
    fn lone_sale_price_becomes_the_regular_price() {
        let mut s = snapshot();
        s.unit_price = None;

        let item = LineItem::from_snapshot(s, 1, Currency::INR).unwrap();
        assert_eq!(item.unit_price, Money::new(80, Currency::INR));
        assert_eq!(item.discounted_unit_price, None);
    }

    #[test]
    fn sale_price_above_regular_is_invalid() {
        let mut s = snapshot();
        s.discounted_unit_price = Some(Money::new(200, Currency::INR));

        let err = LineItem::from_snapshot(s, 1, Currency::INR).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidItem(_)));
    }

    #[test]
    fn wrong_currency_is_rejected() {
        let err = LineItem::from_snapshot(snapshot(), 1, Currency::USD).unwrap_err();
        assert!(matches!(err, CommerceError::CurrencyMismatch { .. }));
    }

    #[test]
    fn effective_price_prefers_the_sale_price() {
        let item = LineItem::from_snapshot(snapshot(), 3, Currency::INR).unwrap();

        assert_eq!(item.effective_unit_price(), Money::new(80, Currency::INR));
        assert_eq!(item.line_total(), Money::new(240, Currency::INR));
    }

    #[test]
    fn serde_uses_camel_case_field_names() {
        let item = LineItem::from_snapshot(snapshot(), 1, Currency::INR).unwrap();
        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("\"productId\""));
        assert!(json.contains("\"unitPrice\""));
        assert!(json.contains("\"discountedUnitPrice\""));
    }
}
