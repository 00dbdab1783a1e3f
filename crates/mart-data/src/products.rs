//! Product repository.

use std::collections::HashMap;

use mart_commerce::cart::ProductSnapshot;
use mart_commerce::catalog::Product;
use mart_commerce::reviews::Review;
use mart_commerce::search::{SearchQuery, SearchResults};
use mart_commerce::{CategoryId, Currency, ProductId};

use crate::{seed, DataError};

/// Read access to the product catalog and its reviews.
#[derive(Debug)]
pub struct ProductRepository {
    products: Vec<Product>,
    reviews: HashMap<ProductId, Vec<Review>>,
}

impl ProductRepository {
    /// Load the embedded seed catalog (INR pricing).
    pub fn with_seed_data() -> Result<Self, DataError> {
        Self::from_seed_json(seed::PRODUCTS_JSON, Currency::INR)
    }

    /// Load a catalog from seed JSON in the given currency.
    pub fn from_seed_json(json: &str, currency: Currency) -> Result<Self, DataError> {
        let (products, reviews) = seed::load_products(json, currency)?;
        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self { products, reviews })
    }

    /// All products, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Result<&Product, DataError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| DataError::ProductNotFound(id.clone()))
    }

    /// The add-to-cart snapshot for a product.
    pub fn snapshot(&self, id: &ProductId) -> Result<ProductSnapshot, DataError> {
        Ok(self.get(id)?.snapshot())
    }

    /// Products in a category or subcategory.
    pub fn by_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                &p.category_id == category_id
                    || p.subcategory_id.as_ref() == Some(category_id)
            })
            .collect()
    }

    /// Products related to the given one: same category, itself excluded.
    pub fn related(&self, id: &ProductId, limit: usize) -> Result<Vec<&Product>, DataError> {
        let product = self.get(id)?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == product.category_id && &p.id != id)
            .take(limit)
            .collect())
    }

    /// Case-insensitive text search over name, description, and brand.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_text(query))
            .collect()
    }

    /// Run a full search query (filters, sort, pagination).
    pub fn query(&self, query: &SearchQuery) -> SearchResults<Product> {
        query.execute(&self.products)
    }

    /// Reviews for a product, newest first.
    pub fn reviews_for(&self, id: &ProductId) -> Result<Vec<&Review>, DataError> {
        // Validate the id even when the product has no reviews.
        self.get(id)?;
        let mut reviews: Vec<&Review> = self
            .reviews
            .get(id)
            .map(|r| r.iter().collect())
            .unwrap_or_default();
        reviews.sort_by_key(|r| std::cmp::Reverse(r.posted_at));
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> ProductRepository {
        ProductRepository::with_seed_data().unwrap()
    }

    #[test]
    fn get_known_product() {
        let repo = repo();
        let product = repo.get(&ProductId::new("prod-pulse-buds")).unwrap();
        assert_eq!(product.brand, "SoundCore");
        assert!(product.is_on_sale());
    }

    #[test]
    fn get_unknown_product_is_not_found() {
        let repo = repo();
        let err = repo.get(&ProductId::new("prod-ghost")).unwrap_err();
        assert!(matches!(err, DataError::ProductNotFound(_)));
    }

    #[test]
    fn snapshot_matches_the_product() {
        let repo = repo();
        let id = ProductId::new("prod-aurora-5g");

        let snapshot = repo.snapshot(&id).unwrap();
        let product = repo.get(&id).unwrap();

        assert_eq!(snapshot.product_id, product.id);
        assert_eq!(snapshot.unit_price, Some(product.price));
        assert_eq!(snapshot.available_stock, product.stock.available);
    }

    #[test]
    fn by_category_includes_subcategories() {
        let repo = repo();

        let electronics = repo.by_category(&CategoryId::new("electronics"));
        let phones = repo.by_category(&CategoryId::new("phones"));

        assert!(phones.len() < electronics.len());
        assert!(phones.iter().all(|p| p
            .subcategory_id
            .as_ref()
            .map(|s| s.as_str() == "phones")
            .unwrap_or(false)));
    }

    #[test]
    fn related_excludes_the_product_itself() {
        let repo = repo();
        let id = ProductId::new("prod-aurora-5g");

        let related = repo.related(&id, 4).unwrap();
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.id != id));
    }

    #[test]
    fn search_matches_brand_and_name() {
        let repo = repo();

        assert!(!repo.search("nexon").is_empty());
        assert!(!repo.search("COFFEE").is_empty());
        assert!(repo.search("zeppelin").is_empty());
    }

    #[test]
    fn reviews_come_newest_first() {
        let repo = repo();
        let reviews = repo.reviews_for(&ProductId::new("prod-nimbus-laptop")).unwrap();

        assert_eq!(reviews.len(), 3);
        assert!(reviews.windows(2).all(|w| w[0].posted_at >= w[1].posted_at));
    }

    #[test]
    fn reviews_for_unknown_product_is_not_found() {
        let repo = repo();
        let err = repo.reviews_for(&ProductId::new("prod-ghost")).unwrap_err();
        assert!(matches!(err, DataError::ProductNotFound(_)));
    }
}
