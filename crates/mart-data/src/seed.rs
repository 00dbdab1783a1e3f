//! Embedded seed data and its conversion into domain types.
//!
//! Seed files use a compact JSON shape (string ids, prices in minor
//! units); this module is the only place that knows it. The catalog
//! currency is fixed at load time.

use std::collections::HashMap;

use mart_commerce::catalog::{Category, Product, StockLevel};
use mart_commerce::reviews::{RatingSummary, Review};
use mart_commerce::{CategoryId, Currency, Money, ProductId, ReviewId};
use serde::Deserialize;

use crate::DataError;

pub(crate) const PRODUCTS_JSON: &str = include_str!("../data/products.json");
pub(crate) const CATEGORIES_JSON: &str = include_str!("../data/categories.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    slug: String,
    brand: String,
    #[serde(default)]
    description: Option<String>,
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
    price: i64,
    #[serde(default)]
    discounted_price: Option<i64>,
    stock: i64,
    #[serde(default)]
    low_stock_threshold: Option<i64>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRecord {
    id: String,
    author: String,
    rating: i64,
    comment: String,
    posted_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    id: String,
    #[serde(default)]
    parent_id: Option<String>,
    name: String,
    slug: String,
    position: i32,
}

/// Parse the embedded product seed into products and their reviews.
///
/// A product's rating summary is aggregated from its seeded reviews.
pub(crate) fn load_products(
    json: &str,
    currency: Currency,
) -> Result<(Vec<Product>, HashMap<ProductId, Vec<Review>>), DataError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;

    let mut products = Vec::with_capacity(records.len());
    let mut reviews_by_product = HashMap::new();

    for record in records {
        let product_id = ProductId::new(record.id);

        let reviews: Vec<Review> = record
            .reviews
            .into_iter()
            .map(|r| Review {
                id: ReviewId::new(r.id),
                product_id: product_id.clone(),
                author: r.author,
                rating: r.rating,
                comment: r.comment,
                posted_at: r.posted_at,
            })
            .collect();

        products.push(Product {
            id: product_id.clone(),
            name: record.name,
            slug: record.slug,
            brand: record.brand,
            description: record.description,
            category_id: CategoryId::new(record.category),
            subcategory_id: record.subcategory.map(CategoryId::new),
            price: Money::new(record.price, currency),
            discounted_price: record.discounted_price.map(|p| Money::new(p, currency)),
            stock: StockLevel {
                available: record.stock,
                low_stock_threshold: record.low_stock_threshold,
            },
            rating: RatingSummary::from_reviews(&reviews),
            images: record.images,
            tags: record.tags,
        });

        reviews_by_product.insert(product_id, reviews);
    }

    Ok((products, reviews_by_product))
}

/// Parse the embedded category seed.
pub(crate) fn load_categories(json: &str) -> Result<Vec<Category>, DataError> {
    let records: Vec<CategoryRecord> = serde_json::from_str(json)?;

    Ok(records
        .into_iter()
        .map(|record| Category {
            id: CategoryId::new(record.id),
            parent_id: record.parent_id.map(CategoryId::new),
            name: record.name,
            slug: record.slug,
            position: record.position,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_product_seed_parses() {
        let (products, reviews) = load_products(PRODUCTS_JSON, Currency::INR).unwrap();
        assert!(!products.is_empty());
        assert_eq!(reviews.len(), products.len());
    }

    #[test]
    fn embedded_category_seed_parses() {
        let categories = load_categories(CATEGORIES_JSON).unwrap();
        assert!(categories.iter().any(|c| c.is_root()));
        assert!(categories.iter().any(|c| !c.is_root()));
    }

    #[test]
    fn seeded_ratings_come_from_reviews() {
        let (products, reviews) = load_products(PRODUCTS_JSON, Currency::INR).unwrap();

        for product in &products {
            let expected = RatingSummary::from_reviews(&reviews[&product.id]);
            assert_eq!(product.rating, expected, "rating mismatch for {}", product.id);
        }
    }

    #[test]
    fn malformed_seed_is_an_error() {
        assert!(load_products("{\"not\": \"an array\"}", Currency::INR).is_err());
        assert!(load_categories("[{\"id\": 42}]").is_err());
    }
}
