//! Product types.

use serde::{Deserialize, Serialize};

use crate::cart::ProductSnapshot;
use crate::catalog::StockLevel;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use crate::reviews::RatingSummary;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Brand name.
    pub brand: String,
    /// Full description.
    pub description: Option<String>,
    /// Top-level category.
    pub category_id: CategoryId,
    /// Subcategory, when the category has one.
    pub subcategory_id: Option<CategoryId>,
    /// Regular price.
    pub price: Money,
    /// Sale price, when discounted.
    pub discounted_price: Option<Money>,
    /// Stock availability.
    pub stock: StockLevel,
    /// Aggregated customer rating.
    pub rating: RatingSummary,
    /// Image URLs, first is the primary image.
    pub images: Vec<String>,
    /// Tags for filtering.
    pub tags: Vec<String>,
}

impl Product {
    /// The price a customer pays right now.
    pub fn effective_price(&self) -> Money {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Check if the product is currently discounted.
    pub fn is_on_sale(&self) -> bool {
        self.discounted_price
            .map(|d| d.amount_minor < self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.discounted_price.and_then(|d| {
            if d.amount_minor < self.price.amount_minor && self.price.amount_minor > 0 {
                let savings = self.price.amount_minor - d.amount_minor;
                Some((savings as f64 / self.price.amount_minor as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Capture the display snapshot handed to the cart at add time.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: Some(self.price),
            discounted_unit_price: self.discounted_price,
            available_stock: self.stock.available,
        }
    }

    /// Case-insensitive text match over name, description, and brand.
    pub fn matches_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.brand.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product {
            id: ProductId::new("prod-1"),
            name: "Trail Running Shoes".to_string(),
            slug: "trail-running-shoes".to_string(),
            brand: "Stride".to_string(),
            description: Some("Lightweight shoes for rough terrain".to_string()),
            category_id: CategoryId::new("fashion"),
            subcategory_id: Some(CategoryId::new("footwear")),
            price: Money::new(3000_00, Currency::INR),
            discounted_price: Some(Money::new(2000_00, Currency::INR)),
            stock: StockLevel::new(10),
            rating: RatingSummary::new(4.3, 21),
            images: vec!["https://img.example/shoes.jpg".to_string()],
            tags: vec!["running".to_string()],
        }
    }

    #[test]
    fn effective_price_prefers_discount() {
        let p = product();
        assert_eq!(p.effective_price(), Money::new(2000_00, Currency::INR));
        assert!(p.is_on_sale());
    }

    #[test]
    fn discount_percentage_from_prices() {
        let p = product();
        let pct = p.discount_percentage().unwrap();
        assert!((pct - 33.33).abs() < 0.1);
    }

    #[test]
    fn no_discount_means_no_percentage() {
        let mut p = product();
        p.discounted_price = None;

        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percentage(), None);
        assert_eq!(p.effective_price(), p.price);
    }

    #[test]
    fn snapshot_carries_prices_and_stock() {
        let p = product();
        let s = p.snapshot();

        assert_eq!(s.product_id, p.id);
        assert_eq!(s.unit_price, Some(p.price));
        assert_eq!(s.discounted_unit_price, p.discounted_price);
        assert_eq!(s.available_stock, 10);
    }

    #[test]
    fn text_match_covers_name_brand_description() {
        let p = product();
        assert!(p.matches_text("TRAIL"));
        assert!(p.matches_text("stride"));
        assert!(p.matches_text("terrain"));
        assert!(!p.matches_text("blender"));
    }
}
