//! Search filter types.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;

/// A search filter, evaluated directly against products in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Full-text match in name/brand/description.
    Text(String),
    /// Filter by top-level category.
    Category(CategoryId),
    /// Filter by subcategory.
    Subcategory(CategoryId),
    /// Filter by brand name (case-insensitive).
    Brand(String),
    /// Filter by effective price range (inclusive bounds).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock products.
    InStock,
    /// Filter by minimum average rating.
    MinRating(f64),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a subcategory filter.
    pub fn subcategory(id: impl Into<CategoryId>) -> Self {
        Filter::Subcategory(id.into())
    }

    /// Create a brand filter.
    pub fn brand(name: impl Into<String>) -> Self {
        Filter::Brand(name.into())
    }

    /// Create a price range filter over the effective price.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => product.matches_text(query),
            Filter::Category(id) => &product.category_id == id,
            Filter::Subcategory(id) => product.subcategory_id.as_ref() == Some(id),
            Filter::Brand(name) => product.brand.eq_ignore_ascii_case(name),
            Filter::PriceRange { min, max } => {
                let price = product.effective_price().amount_minor;
                min.map(|m| price >= m.amount_minor).unwrap_or(true)
                    && max.map(|m| price <= m.amount_minor).unwrap_or(true)
            }
            Filter::InStock => product.stock.is_in_stock(),
            Filter::MinRating(min) => product.rating.average >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StockLevel;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use crate::reviews::RatingSummary;

    fn product(id: &str, price: i64, discounted: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: id.to_string(),
            brand: "Acme".to_string(),
            description: None,
            category_id: CategoryId::new("electronics"),
            subcategory_id: Some(CategoryId::new("audio")),
            price: Money::new(price, Currency::INR),
            discounted_price: discounted.map(|d| Money::new(d, Currency::INR)),
            stock: StockLevel::new(3),
            rating: RatingSummary::new(4.0, 10),
            images: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn category_and_subcategory_filters() {
        let p = product("p1", 1000, None);

        assert!(Filter::category("electronics").matches(&p));
        assert!(!Filter::category("fashion").matches(&p));
        assert!(Filter::subcategory("audio").matches(&p));
        assert!(!Filter::subcategory("phones").matches(&p));
    }

    #[test]
    fn brand_filter_ignores_case() {
        let p = product("p1", 1000, None);
        assert!(Filter::brand("acme").matches(&p));
        assert!(!Filter::brand("other").matches(&p));
    }

    #[test]
    fn price_range_uses_the_effective_price() {
        let p = product("p1", 1000, Some(500));

        let range = Filter::price_range(
            Some(Money::new(400, Currency::INR)),
            Some(Money::new(600, Currency::INR)),
        );
        assert!(range.matches(&p));

        let too_high = Filter::price_range(Some(Money::new(900, Currency::INR)), None);
        assert!(!too_high.matches(&p));
    }

    #[test]
    fn open_ended_price_range_matches() {
        let p = product("p1", 1000, None);
        assert!(Filter::price_range(None, None).matches(&p));
    }

    #[test]
    fn in_stock_filter() {
        let mut p = product("p1", 1000, None);
        assert!(Filter::in_stock().matches(&p));

        p.stock = StockLevel::new(0);
        assert!(!Filter::in_stock().matches(&p));
    }

    #[test]
    fn min_rating_filter() {
        let p = product("p1", 1000, None);
        assert!(Filter::MinRating(4.0).matches(&p));
        assert!(!Filter::MinRating(4.5).matches(&p));
    }
}
